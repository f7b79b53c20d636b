//! sched-report CLI - Compare scheduler benchmark logs

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod error;
mod inputs;

use sched_report_core::report::DEFAULT_REPORT_FILE;
use sched_report_core::{aggregate, summary_json, write_report, ReportConfig, Scheduler};

/// sched-report: Markdown comparison of default, FIFO and lottery scheduler runs
#[derive(Parser, Debug)]
#[command(name = "sched-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Benchmark log of the default scheduler
    #[arg(long, value_name = "FILE", default_value = Scheduler::Default.default_results_file())]
    default_log: PathBuf,

    /// Benchmark log of the FIFO scheduler
    #[arg(long, value_name = "FILE", default_value = Scheduler::Fifo.default_results_file())]
    fifo_log: PathBuf,

    /// Benchmark log of the lottery scheduler
    #[arg(long, value_name = "FILE", default_value = Scheduler::Lottery.default_results_file())]
    lottery_log: PathBuf,

    /// Markdown report destination
    #[arg(
        short,
        long,
        env = "SCHED_REPORT_OUTPUT",
        default_value = DEFAULT_REPORT_FILE
    )]
    output: PathBuf,

    /// Also write a JSON summary (tables, CPU ticks, averages) to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            default_log: self.default_log.clone(),
            fifo_log: self.fifo_log.clone(),
            lottery_log: self.lottery_log.clone(),
            output: self.output.clone(),
            json_output: self.json.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = cli.report_config();
    config
        .validate()
        .with_context(|| "Invalid report configuration")?;

    generate(&config)?;

    println!("Report generated: {}", config.output.display());

    Ok(())
}

fn generate(config: &ReportConfig) -> Result<()> {
    for scheduler in Scheduler::ALL {
        debug!("{} log: {:?}", scheduler, config.input(scheduler));
    }

    let logs = inputs::load_all(config).with_context(|| "Failed to load benchmark logs")?;

    let comparison = aggregate(&logs.default, &logs.fifo, &logs.lottery)
        .with_context(|| "Cannot build the scheduler comparison")?;

    info!(
        "Best single-process scheduler: {}, best concurrent scheduler: {}",
        comparison.best_single(),
        comparison.best_concurrent()
    );

    write_report(&config.output, &comparison)
        .with_context(|| format!("Failed to write report: {:?}", config.output))?;

    if let Some(ref json_path) = config.json_output {
        let json = summary_json(&comparison, Utc::now())?;
        write_file(json_path, &json)?;
        info!("Wrote JSON summary to {:?}", json_path);
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> error::Result<()> {
    std::fs::write(path, content).map_err(|e| error::Error::FileWrite {
        path: path.display().to_string(),
        source: e,
    })
}
