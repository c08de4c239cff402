use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    corner::{Corner, Position},
    scoring::{LogEntry, ScoringAction},
    time_control::Period,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MatchStatus {
    #[default]
    Setup,
    InProgress,
    Finished,
}

/// Name and affiliation supplied at setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompetitorIdentity {
    pub name: String,
    pub school: String,
}

impl CompetitorIdentity {
    pub fn new(name: impl Into<String>, school: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
        }
    }
}

/// Informational per-category counters. No rule reads these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompetitorStats {
    pub takedowns: u32,
    pub escapes: u32,
    pub reversals: u32,
    pub near_fall_2: u32,
    pub near_fall_3: u32,
    pub near_fall_4: u32,
    pub cautions: u32,
    pub stalling: u32,
}

impl CompetitorStats {
    pub fn counter_mut(&mut self, action: ScoringAction) -> &mut u32 {
        match action {
            ScoringAction::Takedown => &mut self.takedowns,
            ScoringAction::Escape => &mut self.escapes,
            ScoringAction::Reversal => &mut self.reversals,
            ScoringAction::NearFall2 => &mut self.near_fall_2,
            ScoringAction::NearFall3 => &mut self.near_fall_3,
            ScoringAction::NearFall4 => &mut self.near_fall_4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Competitor {
    pub corner: Corner,
    pub name: String,
    pub school: String,
    pub score: u32,
    pub stalling_count: u32,
    pub caution_count: u32,
    pub stats: CompetitorStats,
}

impl Competitor {
    pub fn blank(corner: Corner) -> Self {
        Self {
            corner,
            name: String::new(),
            school: String::new(),
            score: 0,
            stalling_count: 0,
            caution_count: 0,
            stats: CompetitorStats::default(),
        }
    }

    /// Name for display, falling back to the corner when none was entered.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("{} corner", self.corner.as_str().to_uppercase())
        } else {
            self.name.clone()
        }
    }
}

/// How a bout was decided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum WinMethod {
    Decision,
    Fall,
    StallingDisqualification,
    Other(String),
}

impl fmt::Display for WinMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinMethod::Decision => f.write_str("Decision"),
            WinMethod::Fall => f.write_str("FALL (PIN)"),
            WinMethod::StallingDisqualification => f.write_str("Disqualification (Stalling)"),
            WinMethod::Other(text) => f.write_str(text),
        }
    }
}

/// Aggregate root for one bout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSnapshot {
    pub status: MatchStatus,
    pub red: Competitor,
    pub green: Competitor,
    pub period: Period,
    /// Seconds remaining in the current period.
    pub match_clock: u32,
    /// Net riding time: positive favours red, negative favours green.
    pub riding_time: i32,
    pub position: Position,
    pub is_running: bool,
    /// Most recent entry first.
    pub logs: Vec<LogEntry>,
    pub winner: Option<Corner>,
    pub win_method: Option<WinMethod>,
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            status: MatchStatus::Setup,
            red: Competitor::blank(Corner::Red),
            green: Competitor::blank(Corner::Green),
            period: Period::P1,
            match_clock: Period::P1.duration_secs(),
            riding_time: 0,
            position: Position::Neutral,
            is_running: false,
            logs: Vec::new(),
            winner: None,
            win_method: None,
        }
    }
}

impl MatchSnapshot {
    pub fn competitor(&self, corner: Corner) -> &Competitor {
        match corner {
            Corner::Red => &self.red,
            Corner::Green => &self.green,
        }
    }

    pub fn competitor_mut(&mut self, corner: Corner) -> &mut Competitor {
        match corner {
            Corner::Red => &mut self.red,
            Corner::Green => &mut self.green,
        }
    }

    /// Whether a live tick timer should exist for this snapshot.
    pub fn clock_should_run(&self) -> bool {
        self.status == MatchStatus::InProgress && self.is_running && self.match_clock > 0
    }

    /// Clock toggled on with no time left; the next tick clears the flag.
    pub fn running_at_zero(&self) -> bool {
        self.status == MatchStatus::InProgress && self.is_running && self.match_clock == 0
    }

    /// Corner currently ahead on points. Ties favour red.
    pub fn leader(&self) -> Corner {
        if self.red.score >= self.green.score {
            Corner::Red
        } else {
            Corner::Green
        }
    }
}

/// Final result of a finished bout, kept for the session only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoutSummary {
    pub winner: Corner,
    pub win_method: WinMethod,
    pub red_name: String,
    pub green_name: String,
    pub red_score: u32,
    pub green_score: u32,
    pub riding_time: i32,
    pub log_entries: usize,
    pub finished_at: DateTime<Utc>,
}

impl BoutSummary {
    /// Builds a summary from a finished snapshot; `None` until a winner is set.
    pub fn from_snapshot(snapshot: &MatchSnapshot) -> Option<Self> {
        if snapshot.status != MatchStatus::Finished {
            return None;
        }
        let winner = snapshot.winner?;
        let win_method = snapshot.win_method.clone()?;
        Some(Self {
            winner,
            win_method,
            red_name: snapshot.red.display_name(),
            green_name: snapshot.green.display_name(),
            red_score: snapshot.red.score,
            green_score: snapshot.green.score,
            riding_time: snapshot.riding_time,
            log_entries: snapshot.logs.len(),
            finished_at: Utc::now(),
        })
    }

    pub fn headline(&self) -> String {
        let (winner, loser) = match self.winner {
            Corner::Red => (&self.red_name, &self.green_name),
            Corner::Green => (&self.green_name, &self.red_name),
        };
        format!(
            "{winner} defeats {loser} by {} ({}-{})",
            self.win_method, self.red_score, self.green_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_blank_setup() {
        let snapshot = MatchSnapshot::default();
        assert_eq!(snapshot.status, MatchStatus::Setup);
        assert_eq!(snapshot.match_clock, 180);
        assert_eq!(snapshot.position, Position::Neutral);
        assert!(snapshot.logs.is_empty());
        assert_eq!(snapshot.red.corner, Corner::Red);
        assert_eq!(snapshot.green.score, 0);
        assert!(!snapshot.clock_should_run());
    }

    #[test]
    fn win_method_display_strings() {
        assert_eq!(
            WinMethod::StallingDisqualification.to_string(),
            "Disqualification (Stalling)"
        );
        assert_eq!(WinMethod::Fall.to_string(), "FALL (PIN)");
        assert_eq!(WinMethod::Other("Injury Default".into()).to_string(), "Injury Default");
    }

    #[test]
    fn summary_requires_finished_bout() {
        let mut snapshot = MatchSnapshot::default();
        assert!(BoutSummary::from_snapshot(&snapshot).is_none());

        snapshot.status = MatchStatus::Finished;
        snapshot.winner = Some(Corner::Green);
        snapshot.win_method = Some(WinMethod::Fall);
        snapshot.green.name = "Lee".into();
        snapshot.green.score = 5;
        let summary = BoutSummary::from_snapshot(&snapshot).expect("summary");
        assert_eq!(summary.headline(), "Lee defeats RED corner by FALL (PIN) (0-5)");
    }

    #[test]
    fn leader_ties_favour_red() {
        let mut snapshot = MatchSnapshot::default();
        assert_eq!(snapshot.leader(), Corner::Red);
        snapshot.green.score = 1;
        assert_eq!(snapshot.leader(), Corner::Green);
    }
}
