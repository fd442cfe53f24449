use super::error::StatsError;
use crate::config::StatsConfig;
use crate::domain::{KeywordSet, parse_hour, validate_postcode};

/// Parsed, validated form of the run parameters the aggregator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    postcode: String,
    from_time: String,
    to_time: String,
    from_hour: u8,
    to_hour: u8,
    keywords: KeywordSet,
}

impl StatsQuery {
    pub fn new(
        postcode: impl Into<String>,
        from_time: impl Into<String>,
        to_time: impl Into<String>,
        keywords: KeywordSet,
    ) -> Result<Self, StatsError> {
        let postcode = postcode.into();
        let from_time = from_time.into();
        let to_time = to_time.into();

        validate_postcode(&postcode).map_err(StatsError::InvalidTargetPostcode)?;
        let from_hour = parse_hour(&from_time).map_err(|source| StatsError::InvalidHour {
            field: "from",
            source,
        })?;
        let to_hour = parse_hour(&to_time).map_err(|source| StatsError::InvalidHour {
            field: "to",
            source,
        })?;

        Ok(Self {
            postcode,
            from_time,
            to_time,
            from_hour,
            to_hour,
            keywords,
        })
    }

    pub fn from_config(config: &StatsConfig) -> Result<Self, StatsError> {
        Self::new(
            config.postcode(),
            config.from_time(),
            config.to_time(),
            KeywordSet::new(config.words()),
        )
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn from_time(&self) -> &str {
        &self.from_time
    }

    pub fn to_time(&self) -> &str {
        &self.to_time
    }

    pub fn from_hour(&self) -> u8 {
        self.from_hour
    }

    pub fn to_hour(&self) -> u8 {
        self.to_hour
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }
}
