use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_log_analyzer::ingest::load_batch;
use transaction_log_analyzer::{AnalysisError, Analyzer, Summary};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transaction-log-analyzer [input].json|[input].csv [log_level:optional] > [summary].json");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let batch = load_batch(path).await?;

    let timer = Instant::now();
    let outcome = Analyzer::new().analyze_value(&batch);
    let duration = timer.elapsed();

    info!("Analyzed transaction log in: {duration:?}");

    write_summary_to_stdout(outcome)?;

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
    //NOTE: stdout carries the summary, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(outcome: Result<Summary, AnalysisError>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    match outcome {
        Ok(summary) => serde_json::to_writer_pretty(&mut output, &summary)?,
        Err(error) => {
            if error.is_invalid_input() {
                warn!("{error}");
            } else {
                error!("{error}");
            }

            serde_json::to_writer(&mut output, &Value::Null)?;
        }
    }

    writeln!(output)?;
    output.flush()?;

    Ok(())
}
