use thiserror::Error;

use crate::events::EventKind;

pub type Result<T, E = MatsideError> = std::result::Result<T, E>;

/// Unified error type covering common failure scenarios across subsystems.
#[derive(Debug, Error)]
pub enum MatsideError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("orchestrator error: {0}")]
    Orchestrator(String),
    #[error("feed error: {0}")]
    Feed(String),
    #[error("operational error: {0}")]
    Ops(String),
    #[error("invalid event stream: {0:?}")]
    Event(EventKind),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
