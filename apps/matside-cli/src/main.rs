mod ui;

use std::{env, path::PathBuf, sync::mpsc};

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use matside_feed::{snapshots, LocalFeed};
use matside_ops::{init_tracing, EventJournal};
use matside_orchestrator::MatchHost;
use matside_types::{commands::MatchCommand, config::MatsideConfig, game::CompetitorIdentity};
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{info, warn};

use crate::ui::{ConsoleSettings, UiMessage};

/// Terminal scoring console for a wrestling bout.
#[derive(Debug, Parser)]
#[command(name = "matside", version)]
struct Args {
    /// Path to a TOML config file (falls back to $MATSIDE_CONFIG, then configs/dev.toml).
    config: Option<PathBuf>,
    #[arg(long, default_value = "")]
    red_name: String,
    #[arg(long, default_value = "")]
    red_school: String,
    #[arg(long, default_value = "")]
    green_name: String,
    #[arg(long, default_value = "")]
    green_school: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.clone());
    init_tracing(&config.ops)?;

    let journal = EventJournal::new();
    let host = MatchHost::new(
        &config.clock,
        LocalFeed::new(config.feed.capacity)?,
        journal.clone(),
    );
    host.boot().await?;

    let (ui_tx, ui_rx) = mpsc::channel::<UiMessage>();
    let mut updates = snapshots(host.feed());
    ui_tx
        .send(UiMessage::Snapshot(Box::new(host.snapshot().await)))
        .context("console closed before start")?;
    let forwarder = tokio::spawn(async move {
        while let Some(snapshot) = updates.next().await {
            if ui_tx.send(UiMessage::Snapshot(Box::new(snapshot))).is_err() {
                break;
            }
        }
    });

    let (cmd_tx, mut cmd_rx) = tokio_mpsc::unbounded_channel::<MatchCommand>();
    let settings = ConsoleSettings {
        red: CompetitorIdentity::new(args.red_name, args.red_school),
        green: CompetitorIdentity::new(args.green_name, args.green_school),
        max_log_rows: config.console.max_log_rows,
    };
    let console = tokio::task::spawn_blocking(move || ui::run(ui_rx, cmd_tx, settings));

    while let Some(command) = cmd_rx.recv().await {
        if let Err(err) = host.execute(command).await {
            warn!("Command failed: {err}");
        }
    }

    let console_result = console.await.context("console thread panicked")?;
    forwarder.abort();
    host.shutdown().await?;
    console_result?;

    let bouts = journal.bouts().await;
    info!("Session ended after {} bout(s)", bouts.len());
    for bout in bouts {
        println!("{}", bout.headline());
    }
    Ok(())
}

fn load_config(from_args: Option<PathBuf>) -> MatsideConfig {
    let from_env = env::var("MATSIDE_CONFIG").ok().map(PathBuf::from);
    let path = from_args
        .or(from_env)
        .unwrap_or_else(|| PathBuf::from("configs/dev.toml"));
    match MatsideConfig::from_file(&path) {
        Ok(cfg) => {
            if let Err(err) = cfg.validate() {
                eprintln!(
                    "Invalid config in '{}': {err}. Falling back to internal defaults.",
                    path.display()
                );
                default_config()
            } else {
                cfg
            }
        }
        Err(err) => {
            eprintln!(
                "Failed to load config from '{}': {err}. Falling back to internal defaults.",
                path.display()
            );
            default_config()
        }
    }
}

fn default_config() -> MatsideConfig {
    let config = MatsideConfig::default();
    debug_assert!(config.validate().is_ok());
    config
}
