//! Replay recorded transfer-engine event logs through the SDN bridge.
//!
//! Each input file is one copy operation: a fresh listener is registered
//! for it, its events are delivered in file order, and the announced
//! summaries come out on the log (or stdout with `--json`).

mod lookup;
mod replay;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowbridge_plugin::SdnPlugin;

use crate::lookup::FsMetadataLookup;
use crate::replay::{CollectingSink, ReplayParams, replay_file};

#[derive(Parser, Debug)]
#[command(name = "flowbridge-replay")]
#[command(about = "Replay recorded transfer-engine event logs through the SDN bridge")]
#[command(version)]
struct Args {
    /// Event log files, one copy operation per file (JSON lines)
    #[arg(required = true)]
    logs: Vec<PathBuf>,

    /// Directory against which relative and file:// sources resolve
    #[arg(long, default_value = ".")]
    metadata_root: PathBuf,

    /// Print each emitted summary as a JSON line on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        root = %args.metadata_root.display(),
        "starting event replay"
    );

    let sink = Arc::new(CollectingSink::default());
    let lookup = Arc::new(FsMetadataLookup::new(&args.metadata_root));
    let plugin = SdnPlugin::new(lookup, sink.clone());

    for log in &args.logs {
        // Each file is one copy operation with its own listener.
        let mut params = ReplayParams::new();
        plugin
            .copy_enter_hook(&mut params)
            .with_context(|| format!("could not register listener for {}", log.display()))?;

        let delivered = replay_file(log, &mut params)?;

        let summaries = sink.take_summaries();
        tracing::info!(
            log = %log.display(),
            events = delivered,
            summaries = summaries.len(),
            "replayed copy operation"
        );

        if args.json {
            for summary in &summaries {
                println!("{}", serde_json::to_string(summary)?);
            }
        }
    }

    Ok(())
}
