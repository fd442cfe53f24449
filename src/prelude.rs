//! Prelude module for convenient imports
//!
//! Import everything you need with: `use recipe_stats::prelude::*;`

// Domain types
pub use crate::domain::{
    DeliveryRecord, DeliveryWindow, HourError, KeywordSet, ValidationError, parse_hour,
};

// Config
pub use crate::config::StatsConfig;

// IO types
pub use crate::io::{
    DeliveryItem, JsonDeliveryStream, ParseError, RawDeliveryRecord, WriteError, write_report,
};

// Stats types
pub use crate::stats::{
    BusiestPostcode, CountPerPostcodeAndTime, RecipeCount, Report, StatsAggregator, StatsError,
    StatsQuery,
};

// Streaming types
pub use crate::streaming::{
    ErrorPolicy, SilentSkip, SkipErrors, StatsSession, generate, generate_with_policy,
};

// App types
pub use crate::app::{AppError, Args, CliApp, StdoutWriter, init_logging};
