pub mod policy;
pub mod session;

// Re-export commonly used types
pub use policy::{ErrorPolicy, SilentSkip, SkipErrors};
pub use session::StatsSession;

use futures::Stream;

use crate::config::StatsConfig;
use crate::io::DeliveryItem;
use crate::stats::{Report, StatsError, StatsQuery};

/// Drain `stream` into a report, logging and skipping bad records.
///
/// The query is validated before the first item is pulled, so a bad hour or
/// target postcode fails the call without consuming anything.
pub async fn generate<S>(stream: S, config: &StatsConfig) -> Result<Report, StatsError>
where
    S: Stream<Item = DeliveryItem> + Unpin,
{
    generate_with_policy(stream, config, SkipErrors).await
}

/// [`generate`] with a caller-chosen error policy
pub async fn generate_with_policy<S, P>(
    stream: S,
    config: &StatsConfig,
    error_policy: P,
) -> Result<Report, StatsError>
where
    S: Stream<Item = DeliveryItem> + Unpin,
    P: ErrorPolicy,
{
    let query = StatsQuery::from_config(config)?;
    let mut session = StatsSession::new(query, error_policy);
    session.process_stream(stream).await?;
    Ok(session.into_report())
}
