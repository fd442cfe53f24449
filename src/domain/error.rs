use thiserror::Error;

/// Record-level validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid postcode {0:?}: must be 1-10 characters")]
    InvalidPostcode(String),

    #[error("Invalid delivery format {0:?}: expected \"<Day> <1-12>AM - <1-12>PM\"")]
    InvalidDeliveryFormat(String),

    #[error("Invalid recipe name: must be 1-100 characters, got {0}")]
    InvalidItemName(usize),
}

/// Failures turning an `<1-12>AM|PM` token into an hour
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HourError {
    #[error("Hour is not a number: {0:?}")]
    NotANumber(String),

    #[error("Hour is not in range 1-12: {0}")]
    OutOfRange(u32),
}
