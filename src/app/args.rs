use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    DEFAULT_FILE, DEFAULT_FROM_TIME, DEFAULT_POSTCODE, DEFAULT_TO_TIME, DEFAULT_WORDS, StatsConfig,
    parse_words,
};

/// Generate recipe statistics from a JSON file of deliveries.
///
/// Every option falls back to an environment variable, then to a default.
#[derive(Debug, Parser)]
#[command(name = "recipe-stats", version)]
#[command(
    after_help = "Example:\n  recipe-stats --file ./files/test.json --postcode 10120 \
                  --words Potato,Mushroom,Veggie --from-time 10AM --to-time 3PM"
)]
pub struct Args {
    /// JSON file containing an array of delivery records
    #[arg(short, long, env = "FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Postcode to count deliveries for
    #[arg(short, long, env = "POSTCODE", default_value = DEFAULT_POSTCODE)]
    pub postcode: String,

    /// Start of the delivery window to count, e.g. 10AM
    #[arg(
        short = 's',
        long = "from-time",
        visible_alias = "fromTime",
        env = "FROM",
        default_value = DEFAULT_FROM_TIME
    )]
    pub from_time: String,

    /// End of the delivery window to count, e.g. 3PM
    #[arg(
        short = 'e',
        long = "to-time",
        visible_alias = "toTime",
        env = "TO",
        default_value = DEFAULT_TO_TIME
    )]
    pub to_time: String,

    /// Comma-separated words to match against recipe names
    #[arg(short, long, env = "WORDS", default_value = DEFAULT_WORDS)]
    pub words: String,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> StatsConfig {
        StatsConfig::default()
            .with_file(self.file)
            .with_postcode(self.postcode)
            .with_from_time(self.from_time)
            .with_to_time(self.to_time)
            .with_words(parse_words(&self.words))
    }
}
