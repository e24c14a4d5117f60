use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{debug, info};

use todoprogress::ProgressReporter;
use todoprogress::cli::{Cli, OutputFormat};
use todoprogress::config::Config;

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            let _ = e.print();
            return code;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    debug!("Using base URL {}", config.base_url);

    let reporter = ProgressReporter::from_config(&config)?;
    let report = reporter.report_progress(cli.employee_id).await?;
    info!(
        "Employee {} completed {}/{} tasks",
        cli.employee_id, report.done_count, report.total_count
    );

    let rendered = match cli.format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => report.to_json()?,
    };

    // Write errors such as a closed pipe surface as exit 1
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)
        .and_then(|()| stdout.flush())
        .context("Failed to write report")?;

    Ok(())
}
