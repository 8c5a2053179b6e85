use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use loopbench::{logging, run_session, BenchConfig, ClockKind, ConfigLoader, OutputFormat};

#[derive(Debug, Parser)]
#[command(author, version, about = "Times an O(n^2) checksum loop")]
struct Cli {
    /// Loop size; prompts on stdin when omitted
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i32>,

    /// Clock used to time the loop
    #[arg(long, value_enum)]
    clock: Option<ClockKind>,

    /// Result format written to stdout
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Optional YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ConfigLoader::new(".").load(path)?,
        None => BenchConfig::default(),
    }
    .with_overrides(cli.clock, cli.format);
    logging::init(&config.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(
        &mut io::stdin().lock(),
        &mut out,
        &mut io::stderr(),
        cli.size,
        config.clock,
        config.format,
    )?;
    out.flush()?;
    Ok(())
}
