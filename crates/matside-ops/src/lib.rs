//! Operational helpers: logging and the session event journal.

use std::{fs::OpenOptions, sync::Arc};

use matside_types::{
    config::OpsConfig, events::SystemEvent, game::BoutSummary, MatsideError, Result,
};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing(config: &OpsConfig) -> Result<()> {
    let filter = EnvFilter::try_new(config.log_level.clone())
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|err| MatsideError::Ops(format!("failed to create log filter: {err}")))?;

    let builder = fmt().with_env_filter(filter);
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| MatsideError::Ops(format!("failed to open log file {path}: {err}")))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|err| MatsideError::Ops(format!("tracing init error: {err}")))?;
    Ok(())
}

/// In-memory record of the session's events and finished bouts.
/// Nothing here outlives the process.
#[derive(Clone, Default)]
pub struct EventJournal {
    events: Arc<Mutex<Vec<SystemEvent>>>,
    bouts: Arc<Mutex<Vec<BoutSummary>>>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_event(&self, event: SystemEvent) -> Result<()> {
        self.events.lock().await.push(event);
        Ok(())
    }

    pub async fn record_bout(&self, summary: BoutSummary) -> Result<()> {
        info!("Bout recorded: {}", summary.headline());
        self.bouts.lock().await.push(summary);
        Ok(())
    }

    pub async fn snapshot_events(&self) -> Vec<SystemEvent> {
        self.events.lock().await.clone()
    }

    pub async fn bouts(&self) -> Vec<BoutSummary> {
        self.bouts.lock().await.clone()
    }
}
