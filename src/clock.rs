use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use cpu_time::ProcessTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which clock brackets the timed loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ClockKind {
    /// CPU time consumed by this process.
    #[default]
    Process,
    /// Wall time from a monotonic counter.
    Monotonic,
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockKind::Process => write!(f, "process"),
            ClockKind::Monotonic => write!(f, "monotonic"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("unable to read process CPU time: {0}")]
    ProcessTime(#[from] std::io::Error),
}

/// An opaque point in time taken from one of the supported clocks.
#[derive(Debug)]
pub enum ClockReading {
    Process(ProcessTime),
    Monotonic(Instant),
}

impl ClockKind {
    pub fn now(self) -> Result<ClockReading, ClockError> {
        match self {
            ClockKind::Process => Ok(ClockReading::Process(ProcessTime::try_now()?)),
            ClockKind::Monotonic => Ok(ClockReading::Monotonic(Instant::now())),
        }
    }
}

impl ClockReading {
    /// Time elapsed since this reading, taken from the same clock.
    pub fn elapsed(&self) -> Result<Duration, ClockError> {
        match self {
            ClockReading::Process(start) => {
                let now = ProcessTime::try_now()?;
                Ok(now.as_duration().saturating_sub(start.as_duration()))
            }
            ClockReading::Monotonic(start) => Ok(start.elapsed()),
        }
    }
}
