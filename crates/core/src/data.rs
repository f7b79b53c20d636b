//! Data structures for extracted measurements and comparison tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheduler variant under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheduler {
    Default,
    Fifo,
    Lottery,
}

impl Scheduler {
    /// All variants in report column order
    pub const ALL: [Scheduler; 3] = [Scheduler::Default, Scheduler::Fifo, Scheduler::Lottery];

    /// Label used in table headers and observations
    pub fn label(self) -> &'static str {
        match self {
            Scheduler::Default => "Default",
            Scheduler::Fifo => "FIFO",
            Scheduler::Lottery => "Lottery",
        }
    }

    /// Log file the benchmark harness writes for this variant
    pub fn default_results_file(self) -> &'static str {
        match self {
            Scheduler::Default => "results_default.txt",
            Scheduler::Fifo => "results_fifo.txt",
            Scheduler::Lottery => "results_lottery.txt",
        }
    }

    fn index(self) -> usize {
        match self {
            Scheduler::Default => 0,
            Scheduler::Fifo => 1,
            Scheduler::Lottery => 2,
        }
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workload category, in the order the harness runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CpuBound,
    IoBound,
    Mixed,
}

impl Category {
    /// All categories in log (and table row) order
    pub const ALL: [Category; 3] = [Category::CpuBound, Category::IoBound, Category::Mixed];

    pub fn label(self) -> &'static str {
        match self {
            Category::CpuBound => "CPU-bound",
            Category::IoBound => "I/O-bound",
            Category::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which measurement series a value was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    SingleProcess,
    Concurrent,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Series::SingleProcess => f.write_str("single-process"),
            Series::Concurrent => f.write_str("concurrent"),
        }
    }
}

/// Runtime and CPU ticks of one single-process run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSample {
    /// Wall time of the process in ticks
    pub runtime_ticks: u64,
    /// Ticks the process actually spent on the CPU
    pub cpu_ticks: u64,
}

/// Everything extracted from one scheduler's benchmark log
///
/// Each field is independently present or absent; nothing ties the
/// single-process fields to the concurrent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementSet {
    pub single_cpu: Option<ProcessSample>,
    pub single_io: Option<ProcessSample>,
    pub single_mixed: Option<ProcessSample>,
    /// Total ticks for the 5-process CPU-bound run
    pub concurrent_cpu: Option<u64>,
    pub concurrent_io: Option<u64>,
    pub concurrent_mixed: Option<u64>,
}

impl MeasurementSet {
    /// Create a set with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-process sample for a category
    pub fn single(&self, category: Category) -> Option<ProcessSample> {
        match category {
            Category::CpuBound => self.single_cpu,
            Category::IoBound => self.single_io,
            Category::Mixed => self.single_mixed,
        }
    }

    /// Concurrent total for a category
    pub fn concurrent(&self, category: Category) -> Option<u64> {
        match category {
            Category::CpuBound => self.concurrent_cpu,
            Category::IoBound => self.concurrent_io,
            Category::Mixed => self.concurrent_mixed,
        }
    }

    /// True when nothing at all was extracted
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One row of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub category: Category,
    pub default: u64,
    pub fifo: u64,
    pub lottery: u64,
}

impl ComparisonRow {
    pub fn value(&self, scheduler: Scheduler) -> u64 {
        match scheduler {
            Scheduler::Default => self.default,
            Scheduler::Fifo => self.fifo,
            Scheduler::Lottery => self.lottery,
        }
    }

    /// Values in report column order
    pub fn values(&self) -> [u64; 3] {
        [self.default, self.fifo, self.lottery]
    }
}

/// Per-scheduler mean of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerAverages {
    pub default: f64,
    pub fifo: f64,
    pub lottery: f64,
}

impl SchedulerAverages {
    pub fn get(&self, scheduler: Scheduler) -> f64 {
        match scheduler {
            Scheduler::Default => self.default,
            Scheduler::Fifo => self.fifo,
            Scheduler::Lottery => self.lottery,
        }
    }

    /// Scheduler with the lowest average; ties go to the first in column order
    pub fn best(&self) -> Scheduler {
        let mut best = Scheduler::Default;
        for scheduler in Scheduler::ALL {
            let value = self.get(scheduler);
            let current = self.get(best);
            if value < current || (current.is_nan() && !value.is_nan()) {
                best = scheduler;
            }
        }
        best
    }
}

impl From<[f64; 3]> for SchedulerAverages {
    fn from(values: [f64; 3]) -> Self {
        Self {
            default: values[Scheduler::Default.index()],
            fifo: values[Scheduler::Fifo.index()],
            lottery: values[Scheduler::Lottery.index()],
        }
    }
}
