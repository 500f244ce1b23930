// Built-in GDP race table
//
// Nominal GDP in billions of current US dollars, 2000-2023, rounded.

use crate::dataset::Dataset;
use crate::errors::{DatasetError, DatasetResult};
use crate::series::{Color, Series};
use crate::timeline::Timeline;

pub const FIRST_YEAR: i32 = 2000;
pub const LAST_YEAR: i32 = 2023;

const YEARS: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

type Row = (&'static str, &'static str, &'static str, [f64; YEARS]);

#[rustfmt::skip]
const TABLE: &[Row] = &[
    ("USA", "United States", "#3b82f6", [
        10251.0, 10582.0, 10929.0, 11457.0, 12217.0, 13039.0, 13816.0, 14474.0,
        14770.0, 14478.0, 15049.0, 15600.0, 16254.0, 16843.0, 17551.0, 18206.0,
        18695.0, 19477.0, 20533.0, 21381.0, 21060.0, 23315.0, 25744.0, 27361.0,
    ]),
    ("CHN", "China", "#ef4444", [
        1211.0, 1339.0, 1471.0, 1660.0, 1955.0, 2286.0, 2752.0, 3550.0,
        4594.0, 5101.0, 6087.0, 7552.0, 8532.0, 9570.0, 10476.0, 11062.0,
        11233.0, 12310.0, 13895.0, 14280.0, 14688.0, 17820.0, 17882.0, 17795.0,
    ]),
    ("JPN", "Japan", "#f43f5e", [
        4968.0, 4374.0, 4183.0, 4519.0, 4893.0, 4831.0, 4601.0, 4579.0,
        5106.0, 5289.0, 5759.0, 6233.0, 6272.0, 5212.0, 4897.0, 4445.0,
        5004.0, 4931.0, 5041.0, 5118.0, 5055.0, 5034.0, 4256.0, 4213.0,
    ]),
    ("DEU", "Germany", "#facc15", [
        1948.0, 1951.0, 2079.0, 2506.0, 2819.0, 2861.0, 3002.0, 3440.0,
        3753.0, 3418.0, 3418.0, 3760.0, 3545.0, 3753.0, 3905.0, 3357.0,
        3469.0, 3690.0, 3977.0, 3889.0, 3890.0, 4260.0, 4082.0, 4456.0,
    ]),
    ("GBR", "United Kingdom", "#6366f1", [
        1666.0, 1650.0, 1785.0, 2054.0, 2422.0, 2544.0, 2718.0, 3090.0,
        2930.0, 2411.0, 2486.0, 2664.0, 2707.0, 2786.0, 3065.0, 2934.0,
        2700.0, 2683.0, 2878.0, 2858.0, 2697.0, 3141.0, 3089.0, 3340.0,
    ]),
    ("FRA", "France", "#0ea5e9", [
        1362.0, 1377.0, 1501.0, 1844.0, 2119.0, 2196.0, 2320.0, 2657.0,
        2918.0, 2690.0, 2643.0, 2863.0, 2683.0, 2811.0, 2856.0, 2439.0,
        2472.0, 2595.0, 2790.0, 2729.0, 2647.0, 2959.0, 2780.0, 3031.0,
    ]),
    ("IND", "India", "#f97316", [
        468.0, 485.0, 515.0, 608.0, 709.0, 820.0, 940.0, 1217.0,
        1199.0, 1342.0, 1676.0, 1823.0, 1828.0, 1857.0, 2039.0, 2103.0,
        2295.0, 2651.0, 2702.0, 2835.0, 2671.0, 3150.0, 3353.0, 3550.0,
    ]),
    ("ITA", "Italy", "#22c55e", [
        1147.0, 1168.0, 1277.0, 1574.0, 1806.0, 1858.0, 1949.0, 2214.0,
        2408.0, 2199.0, 2136.0, 2295.0, 2087.0, 2141.0, 2162.0, 1837.0,
        1877.0, 1961.0, 2092.0, 2011.0, 1897.0, 2155.0, 2050.0, 2255.0,
    ]),
    ("BRA", "Brazil", "#84cc16", [
        655.0, 559.0, 509.0, 558.0, 669.0, 892.0, 1107.0, 1397.0,
        1696.0, 1667.0, 2209.0, 2616.0, 2465.0, 2473.0, 2456.0, 1802.0,
        1796.0, 2064.0, 1917.0, 1873.0, 1476.0, 1670.0, 1951.0, 2174.0,
    ]),
    ("CAN", "Canada", "#dc2626", [
        745.0, 739.0, 760.0, 895.0, 1026.0, 1173.0, 1319.0, 1468.0,
        1553.0, 1374.0, 1617.0, 1793.0, 1828.0, 1847.0, 1806.0, 1556.0,
        1528.0, 1649.0, 1725.0, 1743.0, 1655.0, 2007.0, 2161.0, 2140.0,
    ]),
    ("RUS", "Russia", "#a855f7", [
        260.0, 307.0, 345.0, 430.0, 591.0, 764.0, 990.0, 1300.0,
        1661.0, 1223.0, 1525.0, 2046.0, 2208.0, 2292.0, 2059.0, 1363.0,
        1277.0, 1575.0, 1657.0, 1693.0, 1489.0, 1836.0, 2266.0, 2021.0,
    ]),
    ("KOR", "South Korea", "#14b8a6", [
        576.0, 548.0, 627.0, 702.0, 793.0, 934.0, 1053.0, 1172.0,
        1047.0, 944.0, 1144.0, 1253.0, 1278.0, 1370.0, 1484.0, 1466.0,
        1500.0, 1623.0, 1725.0, 1651.0, 1644.0, 1818.0, 1674.0, 1713.0,
    ]),
    ("ESP", "Spain", "#eab308", [
        598.0, 628.0, 709.0, 907.0, 1069.0, 1157.0, 1260.0, 1474.0,
        1631.0, 1491.0, 1423.0, 1480.0, 1325.0, 1355.0, 1372.0, 1196.0,
        1233.0, 1312.0, 1421.0, 1394.0, 1277.0, 1446.0, 1418.0, 1581.0,
    ]),
    ("AUS", "Australia", "#06b6d4", [
        415.0, 379.0, 395.0, 467.0, 614.0, 693.0, 747.0, 853.0,
        1055.0, 928.0, 1148.0, 1398.0, 1547.0, 1577.0, 1468.0, 1351.0,
        1206.0, 1326.0, 1428.0, 1393.0, 1327.0, 1553.0, 1692.0, 1724.0,
    ]),
    ("MEX", "Mexico", "#10b981", [
        742.0, 797.0, 810.0, 773.0, 818.0, 918.0, 1024.0, 1093.0,
        1175.0, 922.0, 1058.0, 1180.0, 1201.0, 1274.0, 1315.0, 1172.0,
        1078.0, 1159.0, 1222.0, 1269.0, 1090.0, 1273.0, 1463.0, 1789.0,
    ]),
];

/// The built-in GDP dataset, validated like any loaded one
pub fn dataset() -> DatasetResult<Dataset> {
    let timeline = Timeline::range(FIRST_YEAR, LAST_YEAR)?;
    let series = TABLE
        .iter()
        .map(|(code, name, color, values)| -> DatasetResult<Series> {
            let color = color.parse::<Color>().map_err(|_| DatasetError::InvalidColor {
                code: code.to_string(),
                color: color.to_string(),
            })?;
            Ok(Series::new(*code, *name, color).with_values_from(FIRST_YEAR, values))
        })
        .collect::<DatasetResult<Vec<_>>>()?;
    Dataset::new(timeline, series)
}
