use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tracing::{debug, warn};

use super::error::AppError;

pub type StdoutWriter = BufWriter<Stdout>;

/// CLI runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Buffered stdout, handed to the main function
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
///
/// An interrupted run exits without writing a report.
pub struct CliApp {
    name: String,
}

impl CliApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `main_fn` to completion or until a signal arrives, then exit the
    /// process. `main_fn` is responsible for flushing the writer.
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(StdoutWriter) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = BufWriter::new(tokio::io::stdout());

        tokio::select! {
            result = main_fn(writer) => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            signal_code = self.wait_for_signal() => {
                debug!(app = %self.name, code = signal_code, "Interrupted, no report written");
                std::process::exit(signal_code);
            }
        }
    }

    /// Wait for SIGINT, SIGTERM or SIGHUP (Ctrl+C elsewhere) and return the exit code.
    /// If handlers cannot be installed the run simply continues uninterrupted.
    async fn wait_for_signal(&self) -> i32 {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let handlers = (|| {
                Ok::<_, std::io::Error>((
                    signal(SignalKind::terminate())?,
                    signal(SignalKind::interrupt())?,
                    signal(SignalKind::hangup())?,
                ))
            })();

            let (mut sigterm, mut sigint, mut sighup) = match handlers {
                Ok(handlers) => handlers,
                Err(e) => {
                    warn!(error = %e, "Failed to install signal handlers");
                    return std::future::pending().await;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    eprintln!("Received SIGTERM");
                    143 // 128 + 15
                }
                _ = sigint.recv() => {
                    eprintln!("Received SIGINT");
                    130 // 128 + 2
                }
                _ = sighup.recv() => {
                    eprintln!("Received SIGHUP");
                    129 // 128 + 1
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                return std::future::pending().await;
            }
            eprintln!("Received Ctrl+C");
            130
        }
    }
}
