use futures::{Stream, StreamExt};
use tracing::debug;

use super::policy::ErrorPolicy;
use crate::io::DeliveryItem;
use crate::stats::{Report, StatsAggregator, StatsError, StatsQuery};

/// Single-consumer session draining a delivery stream into an aggregator
pub struct StatsSession<P: ErrorPolicy> {
    aggregator: StatsAggregator,
    error_policy: P,
    skipped: usize,
}

impl<P: ErrorPolicy> StatsSession<P> {
    pub fn new(query: StatsQuery, error_policy: P) -> Self {
        Self {
            aggregator: StatsAggregator::new(query),
            error_policy,
            skipped: 0,
        }
    }

    /// Pull every item from the stream.
    ///
    /// Per-record errors go to the error policy and are left out of every
    /// statistic. A fatal source error stops the session.
    pub async fn process_stream<S>(&mut self, mut stream: S) -> Result<(), StatsError>
    where
        S: Stream<Item = DeliveryItem> + Unpin,
    {
        while let Some(item) = stream.next().await {
            match item {
                Ok(record) => self.aggregator.record(record),
                Err(e) if e.is_fatal() => return Err(StatsError::Source(e)),
                Err(e) => {
                    self.skipped += 1;
                    self.error_policy.handle_parse_error(e);
                }
            }
        }

        debug!(
            records = self.aggregator.records(),
            skipped = self.skipped,
            "Delivery stream exhausted"
        );
        Ok(())
    }

    /// Number of stream items rejected so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn aggregator(&self) -> &StatsAggregator {
        &self.aggregator
    }

    /// Consume the session and build the final report
    pub fn into_report(self) -> Report {
        self.aggregator.finish()
    }
}
