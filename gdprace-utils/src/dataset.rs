// Dataset: a timeline plus the series table validated against it

use crate::errors::{DatasetError, DatasetResult};
use crate::series::{Color, Series};
use crate::timeline::Timeline;
use log::info;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Series as written in a dataset file, before colour and year checks
#[derive(Debug, Deserialize)]
struct RawSeries {
    code: String,
    name: String,
    color: String,
    values: BTreeMap<i32, f64>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    years: Timeline,
    series: Vec<RawSeries>,
}

/// An immutable, validated series table.
///
/// Construction rejects any series that lacks a value for a timeline year,
/// so frame computation never meets a gap. Values are resolved per timeline
/// index at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    timeline: Timeline,
    series: Vec<Series>,
    resolved: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(timeline: Timeline, series: Vec<Series>) -> DatasetResult<Self> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(series.len());

        for entry in &series {
            if !seen.insert(entry.code.as_str()) {
                return Err(DatasetError::DuplicateCode(entry.code.clone()));
            }

            let mut row = Vec::with_capacity(timeline.len());
            for &year in timeline.years() {
                let value = entry.value(year).ok_or_else(|| DatasetError::MissingYear {
                    code: entry.code.clone(),
                    year,
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(DatasetError::InvalidValue {
                        code: entry.code.clone(),
                        year,
                        value,
                    });
                }
                row.push(value);
            }
            resolved.push(row);
        }

        Ok(Self {
            timeline,
            series,
            resolved,
        })
    }

    /// Parse a JSON dataset: `{"years": [...], "series": [...]}`
    pub fn from_json(text: &str) -> DatasetResult<Self> {
        let raw: RawDataset = serde_json::from_str(text)?;
        let series = raw
            .series
            .into_iter()
            .map(|s| -> DatasetResult<Series> {
                let color = s.color.parse::<Color>().map_err(|_| DatasetError::InvalidColor {
                    code: s.code.clone(),
                    color: s.color.clone(),
                })?;
                Ok(Series {
                    code: s.code,
                    name: s.name,
                    color,
                    values: s.values,
                })
            })
            .collect::<DatasetResult<Vec<_>>>()?;
        Self::new(raw.years, series)
    }

    /// Read and validate a JSON dataset file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dataset = Self::from_json(&text)?;
        info!(
            "Loaded dataset from {}: {} series over {}-{}",
            path.display(),
            dataset.len(),
            dataset.timeline.first(),
            dataset.timeline.last()
        );
        Ok(dataset)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Number of series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Value of series `series_index` at timeline position `year_index`
    pub fn value_at(&self, series_index: usize, year_index: usize) -> f64 {
        self.resolved[series_index][year_index]
    }
}
