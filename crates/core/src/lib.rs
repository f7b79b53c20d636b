//! sched-report-core - Extraction and comparison of scheduler benchmark logs
//!
//! The pipeline runs in three steps:
//!
//! - [`parser`] pulls single-process and concurrent tick counts out of a log
//! - [`compare`] lines the three scheduler variants up in comparison tables
//! - [`report`] renders the tables and their averages as markdown
//!
//! # Example
//!
//! ```no_run
//! use sched_report_core::{aggregate, parse_from_file, render};
//!
//! let default = parse_from_file("results_default.txt".as_ref()).unwrap();
//! let fifo = parse_from_file("results_fifo.txt".as_ref()).unwrap();
//! let lottery = parse_from_file("results_lottery.txt".as_ref()).unwrap();
//!
//! let comparison = aggregate(&default, &fifo, &lottery).unwrap();
//! println!("{}", render(&comparison));
//! ```

pub mod compare;
pub mod config;
pub mod data;
pub mod error;
pub mod parser;
pub mod report;

pub use compare::{aggregate, column_means, Comparison};
pub use config::ReportConfig;
pub use data::{
    Category, ComparisonRow, MeasurementSet, ProcessSample, Scheduler, SchedulerAverages, Series,
};
pub use error::{Error, Result};
pub use parser::{parse_from_file, parse_from_string, LogParser, MatchCounts};
pub use report::{render, summary_json, write_report};
