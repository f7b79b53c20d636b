//! Loading benchmark logs for each scheduler variant

use crate::error::Result;
use sched_report_core::{LogParser, MeasurementSet, ReportConfig, Scheduler};
use std::path::Path;
use tracing::{debug, warn};

/// Extracted measurements for all three scheduler variants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulerLogs {
    pub default: MeasurementSet,
    pub fifo: MeasurementSet,
    pub lottery: MeasurementSet,
}

/// Parse the log at `path`, substituting an empty set when it does not exist
///
/// Any other read or parse failure is returned to the caller.
pub fn load_measurements(
    parser: &LogParser,
    scheduler: Scheduler,
    path: &Path,
) -> Result<MeasurementSet> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{} not found, using empty results for {}", path.display(), scheduler);
            return Ok(MeasurementSet::new());
        }
        Err(e) => {
            return Err(sched_report_core::Error::FileReadError {
                path: path.display().to_string(),
                source: e,
            }
            .into())
        }
    };

    let (set, counts) = parser.parse_with_counts(&content)?;
    debug!(
        "{} log: {} process block(s), {} concurrent total(s)",
        scheduler, counts.process_blocks, counts.concurrent_totals
    );

    if counts.process_blocks < 3 || counts.concurrent_totals < 3 {
        warn!(
            "{} log {} has fewer than three matches for a series, leaving it empty",
            scheduler,
            path.display()
        );
    }

    Ok(set)
}

/// Load the logs of every scheduler named in the configuration
pub fn load_all(config: &ReportConfig) -> Result<SchedulerLogs> {
    let parser = LogParser::new()?;

    Ok(SchedulerLogs {
        default: load_measurements(&parser, Scheduler::Default, config.input(Scheduler::Default))?,
        fifo: load_measurements(&parser, Scheduler::Fifo, config.input(Scheduler::Fifo))?,
        lottery: load_measurements(&parser, Scheduler::Lottery, config.input(Scheduler::Lottery))?,
    })
}
