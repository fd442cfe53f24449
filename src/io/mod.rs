pub mod error;
pub mod json_reader;
pub mod parse;
pub mod report_writer;

// Re-export commonly used types
pub use error::{ParseError, WriteError};
pub use json_reader::{DeliveryItem, JsonDeliveryStream};
pub use parse::RawDeliveryRecord;
pub use report_writer::write_report;
