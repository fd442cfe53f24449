use clap::Parser;
use tracing::info;

use recipe_stats::prelude::*;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let verbose = args.verbose;
    let config = args.into_config();

    CliApp::new("recipe-stats")
        .run(|stdout| async move {
            init_logging(verbose)?;
            run_stats(stdout, config).await
        })
        .await
}

/// Stream the configured file into a report and print it as JSON
async fn run_stats(stdout: StdoutWriter, config: StatsConfig) -> Result<(), AppError> {
    info!(file = %config.file().display(), "Calculating stats...");

    let deliveries = JsonDeliveryStream::open(config.file());
    let report = generate(deliveries, &config).await?;

    write_report(&report, stdout).await?;

    info!("Done!");
    Ok(())
}
