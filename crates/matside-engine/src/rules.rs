//! Progressive penalty schedules.

use matside_types::scoring::LogAction;

/// A logged penalty: points go to the opponent (zero for warnings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyAward {
    pub action: LogAction,
    pub points: u32,
}

/// Result of a stalling call, keyed on the offender's new violation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyOutcome {
    Award(PenaltyAward),
    /// The offender is disqualified; the bout ends.
    Disqualification,
}

/// Stalling: warning, +1, +1, +2, then disqualification.
pub fn stalling_outcome(count: u32) -> PenaltyOutcome {
    match count {
        0 | 1 => PenaltyOutcome::Award(PenaltyAward {
            action: LogAction::StallingWarning,
            points: 0,
        }),
        2 | 3 => PenaltyOutcome::Award(PenaltyAward {
            action: LogAction::StallingPenalty,
            points: 1,
        }),
        4 => PenaltyOutcome::Award(PenaltyAward {
            action: LogAction::StallingPenalty,
            points: 2,
        }),
        _ => PenaltyOutcome::Disqualification,
    }
}

/// Cautions: two warnings, then +1 every time. Never disqualifies.
pub fn caution_outcome(count: u32) -> PenaltyAward {
    if count >= 3 {
        PenaltyAward {
            action: LogAction::CautionPenalty,
            points: 1,
        }
    } else {
        PenaltyAward {
            action: LogAction::Caution,
            points: 0,
        }
    }
}
