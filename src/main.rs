use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use mdnorm::config::{Args, Config};
use mdnorm::runner::{self, RunStatus};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = Config::from_args(args)?;

    match runner::run(&config)? {
        RunStatus::Completed(summary) => {
            log::info!(
                "processed {} files ({} fixed, {} unchanged)",
                summary.fixed + summary.unchanged,
                summary.fixed,
                summary.unchanged
            );
        }
        RunStatus::MissingDocsDir => {
            println!("{} directory not found", config.docs_dir.display());
        }
    }

    Ok(())
}

/// Initialize env_logger with the configured default level.
///
/// `RUST_LOG` still takes precedence when set.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}
