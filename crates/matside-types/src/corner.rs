use std::fmt;

use serde::{Deserialize, Serialize};

/// The two corners of a bout. Fixed for the lifetime of a competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    Red,
    Green,
}

impl Corner {
    pub const ALL: [Corner; 2] = [Corner::Red, Corner::Green];

    pub fn opponent(self) -> Self {
        match self {
            Corner::Red => Corner::Green,
            Corner::Green => Corner::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::Red => "red",
            Corner::Green => "green",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who, if anyone, controls the contact position on the mat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Neutral,
    RedTop,
    GreenTop,
}

impl Position {
    /// The position in which `corner` is in control.
    pub fn advantage(corner: Corner) -> Self {
        match corner {
            Corner::Red => Position::RedTop,
            Corner::Green => Position::GreenTop,
        }
    }

    pub fn controller(self) -> Option<Corner> {
        match self {
            Position::Neutral => None,
            Position::RedTop => Some(Corner::Red),
            Position::GreenTop => Some(Corner::Green),
        }
    }

    /// Riding-time delta accrued per tick while this position holds.
    pub fn riding_delta(self) -> i32 {
        match self {
            Position::Neutral => 0,
            Position::RedTop => 1,
            Position::GreenTop => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Neutral => "NEUTRAL",
            Position::RedTop => "RED TOP",
            Position::GreenTop => "GRN TOP",
        }
    }
}
