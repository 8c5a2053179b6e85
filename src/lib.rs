pub mod bench;
pub mod clock;
pub mod config;
pub mod input;
pub mod logging;
pub mod workload;

pub use bench::{
    run_benchmark, run_interactive, run_session, BenchError, BenchmarkReport, OutputFormat,
};
pub use clock::ClockKind;
pub use config::{BenchConfig, ConfigLoader};
