pub mod args;
pub mod cli;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use args::Args;
pub use cli::{CliApp, StdoutWriter};
pub use error::AppError;
pub use logging::init_logging;
