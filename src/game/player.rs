use std::fmt;

use super::board::Cell;

/// One of the two competing sides. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who controls a side: a human feeding columns in from the presentation
/// layer, or the search engine at a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideControl {
    Human,
    Automated { depth: usize },
}

impl SideControl {
    pub fn is_automated(self) -> bool {
        matches!(self, SideControl::Automated { .. })
    }
}
