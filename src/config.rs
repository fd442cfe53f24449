//! Run configuration
//!
//! A [`StatsConfig`] is built once (from CLI flags and environment in the
//! binary, directly in tests) and passed by reference to the pipeline.

use std::path::{Path, PathBuf};

pub const DEFAULT_FILE: &str = "/app/files/fixtures.json";
pub const DEFAULT_WORDS: &str = "Potato,Mushroom,Veggie";
pub const DEFAULT_POSTCODE: &str = "10120";
pub const DEFAULT_FROM_TIME: &str = "10AM";
pub const DEFAULT_TO_TIME: &str = "3PM";

/// Immutable settings for one stats run.
///
/// Hours are kept as the raw `<1-12>AM|PM` strings so the report can echo
/// them back; they are parsed when the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    file: PathBuf,
    postcode: String,
    from_time: String,
    to_time: String,
    words: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            postcode: DEFAULT_POSTCODE.to_string(),
            from_time: DEFAULT_FROM_TIME.to_string(),
            to_time: DEFAULT_TO_TIME.to_string(),
            words: parse_words(DEFAULT_WORDS),
        }
    }
}

impl StatsConfig {
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    pub fn with_from_time(mut self, from_time: impl Into<String>) -> Self {
        self.from_time = from_time.into();
        self
    }

    pub fn with_to_time(mut self, to_time: impl Into<String>) -> Self {
        self.to_time = to_time.into();
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn file(&self) -> &Path {
        &self.file
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

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Split a comma-separated keyword list, trimming and dropping blanks
pub fn parse_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
