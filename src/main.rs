//! Command-line entry point: scrape country pages and emit the JSON report.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

use countrybox::{scrape, Options, Report};

#[derive(Parser, Debug)]
#[command(
    name = "countrybox",
    about = "Fetch and parse country data from Wikipedia infoboxes",
    version
)]
struct Args {
    /// How many listed countries to process.
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,

    /// Write the JSON report here instead of printing it to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Time zone for the average-area statistic.
    #[arg(long, default_value = "UTC+3")]
    timezone: String,

    /// Override the country listing endpoint.
    #[arg(long)]
    api_url: Option<Url>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut options = Options {
        limit: args.limit,
        target_time_zone: Some(args.timezone),
        ..Options::default()
    };
    if let Some(api_url) = args.api_url {
        options.api_endpoint = api_url;
    }

    let report = match scrape(&options) {
        Ok(report) => report,
        Err(e) => {
            error!("scrape aborted: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_report(&report, args.output.as_deref()) {
        error!("failed to write report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn write_report(report: &Report, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, json)?;
            info!("saved report to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
