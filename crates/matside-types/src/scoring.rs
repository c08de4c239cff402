use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    corner::Corner,
    time_control::{format_clock, Period},
};

/// Closed set of point-scoring actions, each with a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringAction {
    Takedown,
    Escape,
    Reversal,
    NearFall2,
    NearFall3,
    NearFall4,
}

impl ScoringAction {
    pub const ALL: [ScoringAction; 6] = [
        ScoringAction::Takedown,
        ScoringAction::Escape,
        ScoringAction::Reversal,
        ScoringAction::NearFall2,
        ScoringAction::NearFall3,
        ScoringAction::NearFall4,
    ];

    pub const fn points(self) -> u32 {
        match self {
            ScoringAction::Takedown => 3,
            ScoringAction::Escape => 1,
            ScoringAction::Reversal => 2,
            ScoringAction::NearFall2 => 2,
            ScoringAction::NearFall3 => 3,
            ScoringAction::NearFall4 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringAction::Takedown => "Takedown",
            ScoringAction::Escape => "Escape",
            ScoringAction::Reversal => "Reversal",
            ScoringAction::NearFall2 => "Near Fall 2",
            ScoringAction::NearFall3 => "Near Fall 3",
            ScoringAction::NearFall4 => "Near Fall 4",
        }
    }
}

/// What a log entry records. Undo dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogAction {
    Score(ScoringAction),
    StallingWarning,
    StallingPenalty,
    Caution,
    CautionPenalty,
}

impl LogAction {
    pub fn is_stalling(self) -> bool {
        matches!(self, LogAction::StallingWarning | LogAction::StallingPenalty)
    }

    pub fn is_caution(self) -> bool {
        matches!(self, LogAction::Caution | LogAction::CautionPenalty)
    }

    /// Human-readable text shown in the match log.
    pub fn describe(self, points: u32) -> String {
        match self {
            LogAction::Score(action) => format!("{} (+{points})", action.label()),
            LogAction::StallingWarning => "Stalling Warning".to_string(),
            LogAction::StallingPenalty => format!("Stalling Penalty (+{points} to Opponent)"),
            LogAction::Caution => "Caution".to_string(),
            LogAction::CautionPenalty => format!("Caution Penalty (+{points} to Opponent)"),
        }
    }
}

/// Who a log entry is attributed to. `Neutral` is reserved for clock-only
/// events; no current operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribution {
    Red,
    Green,
    Neutral,
}

impl Attribution {
    pub fn corner(self) -> Option<Corner> {
        match self {
            Attribution::Red => Some(Corner::Red),
            Attribution::Green => Some(Corner::Green),
            Attribution::Neutral => None,
        }
    }
}

impl From<Corner> for Attribution {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::Red => Attribution::Red,
            Corner::Green => Attribution::Green,
        }
    }
}

/// Immutable record of one scoring or penalty action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    /// Match clock at the moment of the action, as `m:ss`.
    pub timestamp: String,
    pub clock_seconds: u32,
    pub period: Period,
    pub action: LogAction,
    pub description: String,
    /// Points applied to a score as a result; zero for warnings.
    pub points: u32,
    pub attribution: Attribution,
    pub recorded_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(
        action: LogAction,
        points: u32,
        attribution: Attribution,
        period: Period,
        clock_seconds: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: format_clock(clock_seconds),
            clock_seconds,
            period,
            action,
            description: action.describe(points),
            points,
            attribution,
            recorded_at: Utc::now(),
        }
    }
}
