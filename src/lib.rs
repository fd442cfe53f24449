//! Recipe delivery statistics.
//!
//! Reads a JSON array of delivery records as a stream, validates each one,
//! and folds the valid records into a [`stats::Report`].

pub mod app;
pub mod config;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod stats;
pub mod streaming;
