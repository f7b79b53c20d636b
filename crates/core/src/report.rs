//! Markdown and JSON rendering of a scheduler comparison

use crate::compare::Comparison;
use crate::data::{ComparisonRow, Scheduler, SchedulerAverages};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Default file name of the markdown report
pub const DEFAULT_REPORT_FILE: &str = "scheduler_comparison.md";

const TABLE_HEADERS: [&str; 4] = [
    "Test Type",
    "Default Runtime",
    "FIFO Runtime",
    "Lottery Runtime",
];

const PLACEHOLDER: &str = "[Analysis based on actual results]";

/// Render the full markdown report
pub fn render(comparison: &Comparison) -> String {
    let mut lines = Vec::new();

    lines.push("# Scheduler Performance Comparison Report\n".to_string());

    lines.push("## Single Process Performance\n".to_string());
    lines.push(pipe_table(&comparison.single));
    lines.push(String::new());

    lines.push("## Concurrent Process Performance\n".to_string());
    lines.push(pipe_table(&comparison.concurrent));
    lines.push(String::new());

    lines.push("## Analysis\n".to_string());

    lines.push("### Single Process Performance Analysis\n".to_string());
    push_averages(&mut lines, &comparison.single_averages);

    lines.push("### Concurrent Process Performance Analysis\n".to_string());
    push_averages(&mut lines, &comparison.concurrent_averages);

    lines.push("### Key Observations\n".to_string());

    lines.push("1. Single Process Performance:".to_string());
    lines.push(format!(
        "   - {} scheduler performs best for single process workloads",
        comparison.best_single()
    ));
    lines.push(format!("   - Possible reasons: {}\n", PLACEHOLDER));

    lines.push("2. Concurrent Process Performance:".to_string());
    lines.push(format!(
        "   - {} scheduler performs best for concurrent workloads",
        comparison.best_concurrent()
    ));
    lines.push(format!("   - Possible reasons: {}\n", PLACEHOLDER));

    lines.push("3. Workload-specific Performance:".to_string());
    lines.push(format!("   - CPU-bound tasks: {}", PLACEHOLDER));
    lines.push(format!("   - I/O-bound tasks: {}", PLACEHOLDER));
    lines.push(format!("   - Mixed workloads: {}\n", PLACEHOLDER));
    lines.push(String::new());

    lines.join("\n")
}

fn push_averages(lines: &mut Vec<String>, averages: &SchedulerAverages) {
    for scheduler in Scheduler::ALL {
        lines.push(format!(
            "- {} Scheduler Average: {:.2} ticks",
            scheduler,
            averages.get(scheduler)
        ));
    }
    lines.push(String::new());
}

/// Pipe table with padded columns: labels left-aligned, ticks right-aligned
fn pipe_table(rows: &[ComparisonRow]) -> String {
    let body: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            let [default, fifo, lottery] = row.values();
            [
                row.category.label().to_string(),
                default.to_string(),
                fifo.to_string(),
                lottery.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!(" {:<width$} ", cell, width = width)
                } else {
                    format!(" {:>width$} ", cell, width = width)
                }
            })
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let separator: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let dashes = "-".repeat(width + 1);
            if i == 0 {
                format!(":{}", dashes)
            } else {
                format!("{}:", dashes)
            }
        })
        .collect();

    let mut lines = vec![format_row(TABLE_HEADERS), format!("|{}|", separator.join("|"))];
    for cells in &body {
        lines.push(format_row([&cells[0], &cells[1], &cells[2], &cells[3]]));
    }

    lines.join("\n")
}

/// Render and persist the markdown report, creating parent directories
pub fn write_report(path: &Path, comparison: &Comparison) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    std::fs::write(path, render(comparison)).map_err(|e| Error::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Machine-readable summary of the comparison, including the CPU ticks table
pub fn summary_json(comparison: &Comparison, generated_at: DateTime<Utc>) -> Result<String> {
    let output = serde_json::json!({
        "generated_at": generated_at,
        "single": comparison.single,
        "single_cpu": comparison.single_cpu,
        "concurrent": comparison.concurrent,
        "single_averages": comparison.single_averages,
        "concurrent_averages": comparison.concurrent_averages,
        "best_single": comparison.best_single(),
        "best_concurrent": comparison.best_concurrent(),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}
