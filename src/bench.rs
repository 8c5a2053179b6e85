//! Timed execution of the workload and rendering of its result.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::clock::{ClockError, ClockKind};
use crate::input::{self, InputError};
use crate::workload;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error("failed to write benchmark result: {0}")]
    Output(#[source] io::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub size: i32,
    pub checksum: i64,
    #[serde(rename = "elapsed_secs", with = "secs_f64")]
    pub elapsed: Duration,
    pub clock: ClockKind,
    pub started_at: DateTime<Utc>,
}

/// Runs the workload for `n` bracketed by two readings of `clock`.
pub fn run_benchmark(n: i32, clock: ClockKind) -> Result<BenchmarkReport, BenchError> {
    let started_at = Utc::now();
    debug!(size = n, %clock, "starting workload");

    let start = clock.now()?;
    let checksum = workload::checksum(n);
    let elapsed = start.elapsed()?;

    info!(
        size = n,
        checksum,
        elapsed_secs = elapsed.as_secs_f64(),
        "workload finished"
    );
    Ok(BenchmarkReport {
        size: n,
        checksum,
        elapsed,
        clock,
        started_at,
    })
}

/// Prompts on `writer` for the size, reads it from `reader`, then runs.
pub fn run_interactive<R, W>(
    reader: &mut R,
    writer: &mut W,
    clock: ClockKind,
) -> Result<BenchmarkReport, BenchError>
where
    R: BufRead,
    W: Write,
{
    let n = input::prompt_for_size(reader, writer)?;
    run_benchmark(n, clock)
}

/// Runs one invocation and writes the report to `out`.
///
/// Without a `size` the user is prompted. The prompt shares `out` in text
/// mode; in JSON mode it goes to `prompt_out` so `out` holds only the report.
pub fn run_session<R, W, P>(
    reader: &mut R,
    out: &mut W,
    prompt_out: &mut P,
    size: Option<i32>,
    clock: ClockKind,
    format: OutputFormat,
) -> Result<BenchmarkReport, BenchError>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let report = match (size, format) {
        (Some(n), _) => run_benchmark(n, clock)?,
        (None, OutputFormat::Text) => run_interactive(reader, out, clock)?,
        (None, OutputFormat::Json) => run_interactive(reader, prompt_out, clock)?,
    };
    report.write_to(out, format).map_err(BenchError::Output)?;
    Ok(report)
}

impl BenchmarkReport {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => {
                writeln!(out, "Result (sum): {}", self.checksum)?;
                writeln!(
                    out,
                    "Calculation took {:.6} seconds to execute",
                    self.elapsed_secs()
                )
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

mod secs_f64 {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_report() -> BenchmarkReport {
        BenchmarkReport {
            size: 10,
            checksum: 2025,
            elapsed: Duration::from_millis(1_500),
            clock: ClockKind::Process,
            started_at: Utc::now(),
        }
    }

    #[test]
    fn report_carries_checksum_and_size() {
        let report = run_benchmark(10, ClockKind::Process).unwrap();
        assert_eq!(report.size, 10);
        assert_eq!(report.checksum, 2025);
        assert_eq!(report.clock, ClockKind::Process);
    }

    #[test]
    fn elapsed_is_finite_and_non_negative() {
        for clock in [ClockKind::Process, ClockKind::Monotonic] {
            let report = run_benchmark(200, clock).unwrap();
            let secs = report.elapsed_secs();
            assert!(secs.is_finite());
            assert!(secs >= 0.0);
        }
    }

    #[test]
    fn interactive_run_rejects_bad_input() {
        let mut input = std::io::Cursor::new("abc\n");
        let mut output = Vec::new();
        let err = run_interactive(&mut input, &mut output, ClockKind::Monotonic).unwrap_err();
        assert!(matches!(err, BenchError::Input(InputError::Invalid { .. })));
    }

    #[test]
    fn text_output_is_two_lines() {
        let mut buffer = Vec::new();
        fixed_report()
            .write_to(&mut buffer, OutputFormat::Text)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Result (sum): 2025",
                "Calculation took 1.500000 seconds to execute"
            ]
        );
    }

    #[test]
    fn json_output_uses_seconds() {
        let mut buffer = Vec::new();
        fixed_report()
            .write_to(&mut buffer, OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["checksum"], 2025);
        assert_eq!(value["elapsed_secs"], 1.5);
        assert_eq!(value["clock"], "process");

        let parsed: BenchmarkReport = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.elapsed, Duration::from_millis(1_500));
    }
}
