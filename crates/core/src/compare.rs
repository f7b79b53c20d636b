//! Aggregation of per-scheduler measurements into comparison tables

use crate::data::{
    Category, ComparisonRow, MeasurementSet, ProcessSample, Scheduler, SchedulerAverages, Series,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Comparison tables for the three scheduler variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Single-process runtime ticks, one row per category
    pub single: Vec<ComparisonRow>,
    /// Single-process CPU ticks (not part of the markdown report)
    pub single_cpu: Vec<ComparisonRow>,
    /// Concurrent total ticks, one row per category
    pub concurrent: Vec<ComparisonRow>,
    pub single_averages: SchedulerAverages,
    pub concurrent_averages: SchedulerAverages,
}

impl Comparison {
    /// Scheduler with the lowest single-process average
    pub fn best_single(&self) -> Scheduler {
        self.single_averages.best()
    }

    /// Scheduler with the lowest concurrent average
    pub fn best_concurrent(&self) -> Scheduler {
        self.concurrent_averages.best()
    }
}

/// Build the comparison tables from the three extracted logs
///
/// Every referenced measurement must be present. The first gap, in row
/// order and then column order, is reported as
/// [`Error::MissingMeasurement`]; nothing is defaulted to zero.
pub fn aggregate(
    default: &MeasurementSet,
    fifo: &MeasurementSet,
    lottery: &MeasurementSet,
) -> Result<Comparison> {
    let sets = [
        (Scheduler::Default, default),
        (Scheduler::Fifo, fifo),
        (Scheduler::Lottery, lottery),
    ];

    let single = build_table(&sets, Series::SingleProcess, |set, category| {
        set.single(category).map(|s: ProcessSample| s.runtime_ticks)
    })?;
    let single_cpu = build_table(&sets, Series::SingleProcess, |set, category| {
        set.single(category).map(|s: ProcessSample| s.cpu_ticks)
    })?;
    let concurrent = build_table(&sets, Series::Concurrent, MeasurementSet::concurrent)?;

    Ok(Comparison {
        single_averages: column_means(&single),
        concurrent_averages: column_means(&concurrent),
        single,
        single_cpu,
        concurrent,
    })
}

fn build_table<F>(
    sets: &[(Scheduler, &MeasurementSet); 3],
    series: Series,
    select: F,
) -> Result<Vec<ComparisonRow>>
where
    F: Fn(&MeasurementSet, Category) -> Option<u64>,
{
    Category::ALL
        .iter()
        .map(|&category| -> Result<ComparisonRow> {
            let mut values = [0u64; 3];
            for (slot, (scheduler, set)) in values.iter_mut().zip(sets) {
                *slot = select(*set, category).ok_or_else(|| Error::MissingMeasurement {
                    scheduler: *scheduler,
                    category,
                    series,
                })?;
            }

            Ok(ComparisonRow {
                category,
                default: values[0],
                fifo: values[1],
                lottery: values[2],
            })
        })
        .collect()
}

/// Unweighted mean of each scheduler column
///
/// An empty table yields NaN for every column.
pub fn column_means(rows: &[ComparisonRow]) -> SchedulerAverages {
    let count = rows.len() as f64;
    let mut sums = [0.0f64; 3];

    for row in rows {
        for (sum, value) in sums.iter_mut().zip(row.values()) {
            *sum += value as f64;
        }
    }

    SchedulerAverages::from(sums.map(|sum| sum / count))
}
