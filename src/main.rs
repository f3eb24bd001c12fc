mod models;
mod pipeline;
mod report;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::pipeline::DatasetBuilder;
use crate::report::Summary;

fn main() -> Result<()> {
    //NOTE: Input and output locations are fixed, the only optional argument is the log level
    let log_level = std::env::args().nth(1)
        .map(|s| parse_log_level(&s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let builder = DatasetBuilder::new();

    let timer = Instant::now();
    let summary = builder.run()?;
    let duration = timer.elapsed();

    info!("Built model-ready dataset in: {duration:?}");

    write_summary_to_stdout(&summary)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the run summary, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(summary: &Summary) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "Step 1 complete.")?;
    write!(output, "{summary}")?;

    output.flush()?;

    Ok(())
}
