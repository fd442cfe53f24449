use tracing::warn;

use crate::io::ParseError;

/// Policy for per-record errors during stream consumption.
///
/// Fatal errors never reach the policy; the session stops on those itself.
pub trait ErrorPolicy: Send + Sync {
    fn handle_parse_error(&self, error: ParseError);
}

/// Log the skipped record and continue
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_parse_error(&self, error: ParseError) {
        match error.index() {
            Some(index) => warn!(index, error = %error, "Skipping delivery record"),
            None => warn!(error = %error, "Skipping unreadable delivery input"),
        }
    }
}

/// Skip errors without logging
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_parse_error(&self, _error: ParseError) {}
}
