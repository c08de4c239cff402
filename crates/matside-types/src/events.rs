use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    commands::MatchCommand,
    game::{BoutSummary, MatchSnapshot},
};

/// High-level event bus message kinds moving through the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Lifecycle,
    Snapshot,
    Command,
    Clock,
}

/// Immutable event envelope for logging and observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemEvent {
    pub id: Uuid,
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    Lifecycle(LifecycleEvent),
    Snapshot(Box<MatchSnapshot>),
    Command(CommandEvent),
    Clock(ClockEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub phase: LifecyclePhase,
    pub details: Option<String>,
    pub summary: Option<BoutSummary>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LifecyclePhase {
    Boot,
    MatchStart,
    MatchEnd,
    Reset,
    Shutdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEvent {
    pub command: MatchCommand,
    pub outcome: CommandOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Applied,
    Finished,
    Ignored(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockEvent {
    pub armed: bool,
    pub remaining_secs: u32,
    pub generation: u64,
}

impl SystemEvent {
    pub fn new(kind: EventKind, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            timestamp: Utc::now(),
            payload,
        }
    }

    pub fn lifecycle(phase: LifecyclePhase, details: impl Into<String>) -> Self {
        Self::new(
            EventKind::Lifecycle,
            EventPayload::Lifecycle(LifecycleEvent {
                phase,
                details: Some(details.into()),
                summary: None,
            }),
        )
    }

    pub fn snapshot(snapshot: MatchSnapshot) -> Self {
        Self::new(EventKind::Snapshot, EventPayload::Snapshot(Box::new(snapshot)))
    }

    /// The carried snapshot, if this is a snapshot event.
    pub fn as_snapshot(&self) -> Option<&MatchSnapshot> {
        match &self.payload {
            EventPayload::Snapshot(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}
