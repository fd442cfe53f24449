use thiserror::Error;

use crate::domain::{HourError, ValidationError};
use crate::io::ParseError;

/// Errors that prevent a report from being produced
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid {field} hour: {source}")]
    InvalidHour {
        field: &'static str,
        #[source]
        source: HourError,
    },

    #[error("Invalid target postcode: {0}")]
    InvalidTargetPostcode(#[source] ValidationError),

    #[error("Delivery source error: {0}")]
    Source(#[from] ParseError),
}
