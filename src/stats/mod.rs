pub mod aggregator;
pub mod error;
pub mod query;
pub mod report;

// Re-export commonly used types
pub use aggregator::StatsAggregator;
pub use error::StatsError;
pub use query::StatsQuery;
pub use report::{BusiestPostcode, CountPerPostcodeAndTime, RecipeCount, Report};
