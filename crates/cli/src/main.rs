mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use ripple_compute::DetectionEngine;
use ripple_core::config::load_dotenv;
use ripple_core::{Config, DetectionParams};
use ripple_ingest::{read_event_log, write_anomalies_to_path};

use crate::cli::CliArgs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();
    let config = args.merge_into(
        Config::from_env().context("invalid RIPPLE_* environment configuration")?,
    );
    config.log_summary();

    let batch = read_event_log(&config.batch_log)
        .with_context(|| format!("failed to read batch log {}", config.batch_log.display()))?;
    if batch.params.is_some() && (config.degree.is_some() || config.window.is_some()) {
        warn!("D/T override given, ignoring the batch log's configuration record where set");
    }
    let params = DetectionParams::resolve(batch.params, config.degree, config.window)
        .context("invalid detection parameters")?;

    // Both logs are parsed before any event is applied, so a bad stream
    // aborts the run without writing partial output.
    let stream = read_event_log(&config.stream_log)
        .with_context(|| format!("failed to read stream log {}", config.stream_log.display()))?;
    if stream.params.is_some() {
        debug!("stream log carries a configuration record, ignored");
    }

    let mut engine = DetectionEngine::from_history(params, batch.events);
    let anomalies = engine.process_stream(stream.events);

    write_anomalies_to_path(&config.output, &anomalies)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    if args.stats {
        let stats = engine.graph().stats();
        info!(
            persons = stats.person_count,
            friendships = stats.friendship_count,
            purchases = stats.purchase_count,
            "graph stats"
        );
    }

    for id in &args.inspect {
        match engine.graph().get(id) {
            Some(person) => println!("{}", person),
            None => println!("id={}: not in network", id),
        }
    }

    info!("ripple finished, {} anomalies flagged", anomalies.len());
    Ok(())
}
