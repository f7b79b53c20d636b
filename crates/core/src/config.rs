//! Input and output locations for a report run

use crate::data::Scheduler;
use crate::error::{Error, Result};
use crate::report::DEFAULT_REPORT_FILE;
use std::path::{Component, Path, PathBuf};

/// Where the benchmark logs are read from and the report is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub default_log: PathBuf,
    pub fifo_log: PathBuf,
    pub lottery_log: PathBuf,
    /// Markdown report destination
    pub output: PathBuf,
    /// Optional JSON summary destination
    pub json_output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_log: Scheduler::Default.default_results_file().into(),
            fifo_log: Scheduler::Fifo.default_results_file().into(),
            lottery_log: Scheduler::Lottery.default_results_file().into(),
            output: DEFAULT_REPORT_FILE.into(),
            json_output: None,
        }
    }
}

impl ReportConfig {
    /// Log path for a scheduler variant
    pub fn input(&self, scheduler: Scheduler) -> &Path {
        match scheduler {
            Scheduler::Default => &self.default_log,
            Scheduler::Fifo => &self.fifo_log,
            Scheduler::Lottery => &self.lottery_log,
        }
    }

    /// Reject configurations that would overwrite one of the input logs
    ///
    /// Paths are compared lexically with `.` components dropped, so
    /// `./results_fifo.txt` and `results_fifo.txt` collide. `..` and
    /// symlinks are not resolved.
    pub fn validate(&self) -> Result<()> {
        let outputs = std::iter::once(&self.output).chain(self.json_output.as_ref());

        for output in outputs {
            if let Some(scheduler) = Scheduler::ALL
                .into_iter()
                .find(|&s| same_path(self.input(s), output))
            {
                return Err(Error::ConfigError(format!(
                    "output '{}' would overwrite the {} scheduler log",
                    output.display(),
                    scheduler
                )));
            }
        }

        if self
            .json_output
            .as_ref()
            .is_some_and(|json| same_path(json, &self.output))
        {
            return Err(Error::ConfigError(
                "markdown and JSON outputs must be different files".to_string(),
            ));
        }

        Ok(())
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    significant_components(a).eq(significant_components(b))
}

fn significant_components(path: &Path) -> impl Iterator<Item = Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
}
