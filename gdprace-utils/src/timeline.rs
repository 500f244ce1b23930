// Timeline: the ordered years a race animation traverses

use crate::errors::{DatasetError, DatasetResult};
use serde::{Deserialize, Serialize};

/// Strictly increasing, non-empty sequence of years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    years: Vec<i32>,
}

impl Timeline {
    pub fn new(years: Vec<i32>) -> DatasetResult<Self> {
        if years.is_empty() {
            return Err(DatasetError::EmptyTimeline);
        }
        if let Some(pair) = years.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(DatasetError::TimelineNotIncreasing {
                previous: pair[0],
                next: pair[1],
            });
        }
        Ok(Self { years })
    }

    /// Every year from `first` to `last` inclusive
    pub fn range(first: i32, last: i32) -> DatasetResult<Self> {
        Self::new((first..=last).collect())
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn first(&self) -> i32 {
        self.years[0]
    }

    pub fn last(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    pub fn year_at(&self, index: usize) -> i32 {
        self.years[index]
    }
}

impl<'de> Deserialize<'de> for Timeline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let years = Vec::<i32>::deserialize(deserializer)?;
        Timeline::new(years).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let timeline = Timeline::range(2000, 2023).unwrap();
        assert_eq!(timeline.len(), 24);
        assert_eq!(timeline.first(), 2000);
        assert_eq!(timeline.last(), 2023);
    }

    #[test]
    fn test_single_year() {
        let timeline = Timeline::new(vec![2010]).unwrap();
        assert_eq!(timeline.first(), timeline.last());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Timeline::new(vec![]),
            Err(DatasetError::EmptyTimeline)
        ));
        assert!(Timeline::range(2005, 2000).is_err());
    }

    #[test]
    fn test_rejects_unordered() {
        let err = Timeline::new(vec![2000, 2002, 2002]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::TimelineNotIncreasing {
                previous: 2002,
                next: 2002
            }
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Timeline>("[2000, 2001]").is_ok());
        assert!(serde_json::from_str::<Timeline>("[2001, 2000]").is_err());
    }
}
