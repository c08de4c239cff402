use std::fmt;

use serde::{Deserialize, Serialize};

use crate::corner::Corner;

/// Match periods in bout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Period {
    #[default]
    P1,
    P2,
    P3,
    Overtime,
    TieBreak,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::P1,
        Period::P2,
        Period::P3,
        Period::Overtime,
        Period::TieBreak,
    ];

    /// Canonical period length in seconds.
    pub const fn duration_secs(self) -> u32 {
        match self {
            Period::P1 => 180,
            Period::P2 => 120,
            Period::P3 => 120,
            Period::Overtime => 60,
            Period::TieBreak => 30,
        }
    }

    /// Following period, wrapping from the tie-break back to period one.
    pub fn next(self) -> Self {
        match self {
            Period::P1 => Period::P2,
            Period::P2 => Period::P3,
            Period::P3 => Period::Overtime,
            Period::Overtime => Period::TieBreak,
            Period::TieBreak => Period::P1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::P1 => "1",
            Period::P2 => "2",
            Period::P3 => "3",
            Period::Overtime => "OT",
            Period::TieBreak => "TB",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Formats the magnitude of the net riding time. The sign is conveyed by
/// [`RidingAdvantage`], never by the clock text.
pub fn format_riding_time(riding_time: i32) -> String {
    format_clock(riding_time.unsigned_abs())
}

/// Which corner is ahead on riding time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RidingAdvantage {
    Red,
    Green,
    Even,
}

impl RidingAdvantage {
    pub fn from_riding_time(riding_time: i32) -> Self {
        match riding_time.signum() {
            1 => RidingAdvantage::Red,
            -1 => RidingAdvantage::Green,
            _ => RidingAdvantage::Even,
        }
    }

    pub fn corner(self) -> Option<Corner> {
        match self {
            RidingAdvantage::Red => Some(Corner::Red),
            RidingAdvantage::Green => Some(Corner::Green),
            RidingAdvantage::Even => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RidingAdvantage::Red => "RED ADVANTAGE",
            RidingAdvantage::Green => "GREEN ADVANTAGE",
            RidingAdvantage::Even => "NEUTRAL TIME",
        }
    }
}

/// Riding time credited to `corner`: the net magnitude when that corner is
/// ahead, zero otherwise.
pub fn riding_time_for(corner: Corner, riding_time: i32) -> u32 {
    match RidingAdvantage::from_riding_time(riding_time).corner() {
        Some(ahead) if ahead == corner => riding_time.unsigned_abs(),
        _ => 0,
    }
}
