pub mod delivery;
pub mod error;
pub mod hour;
pub mod keywords;
pub mod record;

// Re-export commonly used types
pub use delivery::DeliveryWindow;
pub use error::{HourError, ValidationError};
pub use hour::{Meridiem, parse_hour};
pub use keywords::KeywordSet;
pub use record::{DeliveryRecord, MAX_POSTCODE_LEN, MAX_RECIPE_LEN, validate_postcode};
