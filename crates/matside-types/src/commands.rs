//! Named operations a presentation layer may invoke on the match.

use serde::{Deserialize, Serialize};

use crate::{
    corner::{Corner, Position},
    game::{CompetitorIdentity, WinMethod},
    scoring::ScoringAction,
    time_control::Period,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    // --- Lifecycle ---
    StartMatch {
        red: CompetitorIdentity,
        green: CompetitorIdentity,
    },
    EndMatch {
        winner: Corner,
        method: WinMethod,
    },
    /// End on points; ties go to red.
    EndByDecision,
    ResetToSetup,

    // --- Scoring ---
    Score {
        corner: Corner,
        action: ScoringAction,
    },
    Stalling { corner: Corner },
    Caution { corner: Corner },
    UndoLast,

    // --- Mat and clock control ---
    SetPeriod { period: Period },
    SetPosition { position: Position },
    ToggleClock,
    Tick,
}

impl MatchCommand {
    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            MatchCommand::StartMatch { .. } => "start_match",
            MatchCommand::EndMatch { .. } => "end_match",
            MatchCommand::EndByDecision => "end_by_decision",
            MatchCommand::ResetToSetup => "reset_to_setup",
            MatchCommand::Score { .. } => "apply_score",
            MatchCommand::Stalling { .. } => "apply_stalling",
            MatchCommand::Caution { .. } => "apply_caution",
            MatchCommand::UndoLast => "undo_last",
            MatchCommand::SetPeriod { .. } => "set_period",
            MatchCommand::SetPosition { .. } => "set_position",
            MatchCommand::ToggleClock => "toggle_clock",
            MatchCommand::Tick => "tick",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_serializes_with_type_tag() {
        let cmd = MatchCommand::Score {
            corner: Corner::Red,
            action: ScoringAction::Takedown,
        };
        let json = serde_json::to_value(&cmd).expect("serialize command");
        assert_eq!(json["type"], "Score");
        assert_eq!(json["corner"], "red");
        let back: MatchCommand = serde_json::from_value(json).expect("deserialize command");
        assert_eq!(back, cmd);
    }
}
