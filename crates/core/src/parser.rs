//! Parser for scheduler benchmark logs
//!
//! Single-process block:
//! ```text
//! Process 4:
//!   Runtime: 112 ticks
//!   CPU ticks: 97
//! ```
//!
//! Concurrent total:
//! ```text
//! Total time for 5 processes: 431 ticks
//! ```
//!
//! The log carries no workload label, so blocks are assigned purely by
//! position: the first match is CPU-bound, then I/O-bound, then mixed.

use crate::data::{MeasurementSet, ProcessSample};
use crate::error::{Error, Result};
use regex::{Captures, Regex};

/// Number of processes in each concurrent run
pub const CONCURRENT_PROCESSES: u32 = 5;

/// How many times each pattern matched in a log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub process_blocks: usize,
    pub concurrent_totals: usize,
}

/// Parser for benchmark logs of a single scheduler variant
pub struct LogParser {
    /// Regex for a single-process block
    process_regex: Regex,
    /// Regex for a concurrent total line
    concurrent_regex: Regex,
}

impl LogParser {
    /// Create a new log parser
    ///
    /// Numbers are matched as ASCII digits only; other Unicode decimal
    /// digits do not form a match.
    pub fn new() -> Result<Self> {
        let process_regex = Regex::new(
            r"Process (?P<pid>[0-9]+):\r?\n\s+Runtime: (?P<runtime>[0-9]+) ticks\r?\n\s+CPU ticks: (?P<cpu>[0-9]+)",
        )?;

        let concurrent_regex = Regex::new(&format!(
            r"Total time for {} processes: (?P<total>[0-9]+) ticks",
            CONCURRENT_PROCESSES
        ))?;

        Ok(Self {
            process_regex,
            concurrent_regex,
        })
    }

    /// Extract the measurement set from a log
    ///
    /// Each series is filled only when at least three matches exist; only
    /// the first three are converted to numbers and anything after them is
    /// ignored.
    pub fn parse(&self, text: &str) -> Result<MeasurementSet> {
        self.parse_with_counts(text).map(|(set, _)| set)
    }

    /// Like [`LogParser::parse`], also reporting how many matches each pattern had
    pub fn parse_with_counts(&self, text: &str) -> Result<(MeasurementSet, MatchCounts)> {
        let counts = MatchCounts {
            process_blocks: self.process_match_count(text),
            concurrent_totals: self.concurrent_match_count(text),
        };
        let mut set = MeasurementSet::new();

        if counts.process_blocks >= 3 {
            if let Some([cpu, io, mixed]) = self.process_triple(text)? {
                set.single_cpu = Some(cpu);
                set.single_io = Some(io);
                set.single_mixed = Some(mixed);
            }
        }

        if counts.concurrent_totals >= 3 {
            if let Some([cpu, io, mixed]) = self.concurrent_triple(text)? {
                set.concurrent_cpu = Some(cpu);
                set.concurrent_io = Some(io);
                set.concurrent_mixed = Some(mixed);
            }
        }

        Ok((set, counts))
    }

    /// Number of single-process blocks in the log
    pub fn process_match_count(&self, text: &str) -> usize {
        self.process_regex.find_iter(text).count()
    }

    /// Number of concurrent total lines in the log
    pub fn concurrent_match_count(&self, text: &str) -> usize {
        self.concurrent_regex.find_iter(text).count()
    }

    fn process_triple(&self, text: &str) -> Result<Option<[ProcessSample; 3]>> {
        let mut samples = self.process_regex.captures_iter(text).map(|captures| {
            Ok(ProcessSample {
                runtime_ticks: parse_field(&captures, "runtime")?,
                cpu_ticks: parse_field(&captures, "cpu")?,
            })
        });
        first_three(&mut samples)
    }

    fn concurrent_triple(&self, text: &str) -> Result<Option<[u64; 3]>> {
        let mut totals = self
            .concurrent_regex
            .captures_iter(text)
            .map(|captures| parse_field(&captures, "total"));
        first_three(&mut totals)
    }
}

/// Pull the first three items off an iterator, converting nothing beyond them
fn first_three<T, I>(items: &mut I) -> Result<Option<[T; 3]>>
where
    I: Iterator<Item = Result<T>>,
{
    match (items.next(), items.next(), items.next()) {
        (Some(a), Some(b), Some(c)) => Ok(Some([a?, b?, c?])),
        _ => Ok(None),
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new().expect("Failed to create parser - regex compilation failed")
    }
}

fn parse_field(captures: &Captures<'_>, field: &'static str) -> Result<u64> {
    let value = &captures[field];
    value.parse().map_err(|source| Error::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

/// Parse a benchmark log from a file
pub fn parse_from_file(path: &std::path::Path) -> Result<MeasurementSet> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let parser = LogParser::new()?;
    parser.parse(&content)
}

/// Parse a benchmark log from a string
pub fn parse_from_string(text: &str) -> Result<MeasurementSet> {
    let parser = LogParser::new()?;
    parser.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    const FULL_LOG: &str = r#"
1. Single Process Tests
Process 4:
  Runtime: 112 ticks
  CPU ticks: 97
Process 5:
  Runtime: 305 ticks
  CPU ticks: 12
Process 6:
  Runtime: 208 ticks
  CPU ticks: 61

2. Concurrent Process Tests
Running 5 CPU-bound processes:

Total time for 5 processes: 540 ticks

Running 5 I/O-bound processes:

Total time for 5 processes: 1210 ticks

Running 5 mixed workload processes:

Total time for 5 processes: 876 ticks
"#;

    #[test]
    fn test_parse_full_log() {
        let parser = LogParser::new().unwrap();
        let set = parser.parse(FULL_LOG).unwrap();

        assert_eq!(
            set.single_cpu,
            Some(ProcessSample {
                runtime_ticks: 112,
                cpu_ticks: 97
            })
        );
        assert_eq!(
            set.single_io,
            Some(ProcessSample {
                runtime_ticks: 305,
                cpu_ticks: 12
            })
        );
        assert_eq!(
            set.single_mixed,
            Some(ProcessSample {
                runtime_ticks: 208,
                cpu_ticks: 61
            })
        );
        assert_eq!(set.concurrent_cpu, Some(540));
        assert_eq!(set.concurrent_io, Some(1210));
        assert_eq!(set.concurrent_mixed, Some(876));
    }

    #[test]
    fn test_parse_empty_input() {
        let set = parse_from_string("").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_two_matches_leave_series_empty() {
        let output = r#"
Process 3:
  Runtime: 10 ticks
  CPU ticks: 9
Process 4:
  Runtime: 20 ticks
  CPU ticks: 19
Total time for 5 processes: 100 ticks
Total time for 5 processes: 200 ticks
"#;

        let set = parse_from_string(output).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_series_are_independent() {
        let output = r#"
Total time for 5 processes: 100 ticks
Total time for 5 processes: 200 ticks
Total time for 5 processes: 300 ticks
Process 3:
  Runtime: 10 ticks
  CPU ticks: 9
"#;

        let set = parse_from_string(output).unwrap();
        assert_eq!(set.single(Category::CpuBound), None);
        assert_eq!(set.concurrent(Category::CpuBound), Some(100));
        assert_eq!(set.concurrent(Category::Mixed), Some(300));
    }

    #[test]
    fn test_extra_matches_are_ignored() {
        let output = r#"
Total time for 5 processes: 1 ticks
Total time for 5 processes: 2 ticks
Total time for 5 processes: 3 ticks
Total time for 5 processes: 4 ticks
"#;

        let set = parse_from_string(output).unwrap();
        assert_eq!(set.concurrent_cpu, Some(1));
        assert_eq!(set.concurrent_io, Some(2));
        assert_eq!(set.concurrent_mixed, Some(3));
    }

    #[test]
    fn test_other_process_counts_do_not_match() {
        let output = r#"
Total time for 3 processes: 10 ticks
Total time for 3 processes: 20 ticks
Total time for 3 processes: 30 ticks
"#;

        let set = parse_from_string(output).unwrap();
        assert_eq!(set.concurrent_cpu, None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let output = "Process 1:\r\n  Runtime: 7 ticks\r\n  CPU ticks: 6\r\n\
                      Process 2:\r\n  Runtime: 8 ticks\r\n  CPU ticks: 5\r\n\
                      Process 3:\r\n  Runtime: 9 ticks\r\n  CPU ticks: 4\r\n";

        let set = parse_from_string(output).unwrap();
        assert_eq!(set.single_mixed.map(|s| s.runtime_ticks), Some(9));
        assert_eq!(set.single_mixed.map(|s| s.cpu_ticks), Some(4));
    }

    #[test]
    fn test_interleaved_noise_is_skipped() {
        let output = r#"
Child process 4 starting work...
Process 4:
  Runtime: 11 ticks
  CPU ticks: 10
Child process 4 completed work
Process 5:
  Runtime: 22 ticks
  CPU ticks: 20
Process 6 metrics:
Process 6:
  Runtime: 33 ticks
  CPU ticks: 30
"#;

        let parser = LogParser::new().unwrap();
        let (set, counts) = parser.parse_with_counts(output).unwrap();
        assert_eq!(counts.process_blocks, 3);
        assert_eq!(counts.concurrent_totals, 0);
        assert_eq!(set.single_mixed.map(|s| s.runtime_ticks), Some(33));
    }

    #[test]
    fn test_overflow_in_first_three_is_an_error() {
        let output = r#"
Total time for 5 processes: 1 ticks
Total time for 5 processes: 99999999999999999999999 ticks
Total time for 5 processes: 3 ticks
"#;

        let err = parse_from_string(output).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { field: "total", .. }));
    }

    #[test]
    fn test_overflow_after_third_match_is_ignored() {
        let output = r#"
Total time for 5 processes: 1 ticks
Total time for 5 processes: 2 ticks
Total time for 5 processes: 3 ticks
Total time for 5 processes: 99999999999999999999999 ticks
"#;

        let set = parse_from_string(output).unwrap();
        assert_eq!(set.concurrent_cpu, Some(1));
        assert_eq!(set.concurrent_io, Some(2));
        assert_eq!(set.concurrent_mixed, Some(3));
    }

    #[test]
    fn test_overflow_with_two_matches_leaves_series_empty() {
        let output = r#"
Process 1:
  Runtime: 99999999999999999999999 ticks
  CPU ticks: 1
Total time for 5 processes: 1 ticks
Total time for 5 processes: 99999999999999999999999 ticks
"#;

        let set = parse_from_string(output).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        let output = "Total time for 5 processes: \u{661}\u{662} ticks\n\
                      Total time for 5 processes: 2 ticks\n\
                      Total time for 5 processes: 3 ticks\n";

        let parser = LogParser::new().unwrap();
        assert_eq!(parser.concurrent_match_count(output), 2);
        assert!(parser.parse(output).unwrap().is_empty());
    }

    #[test]
    fn test_parse_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = parse_from_file(&dir.path().join("results_fifo.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("results_default.txt");
        std::fs::write(&path, FULL_LOG).unwrap();

        let set = parse_from_file(&path).unwrap();
        assert_eq!(set.concurrent_io, Some(1210));
    }
}
