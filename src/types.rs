//! Core domain types for the tic-tac-toe board.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Uppercase mark character for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parses a mark character, case-insensitively.
    ///
    /// Returns `None` for anything other than x/X/o/O.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player whose mark occupies the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Glyph used when rendering the board, `*` for an empty cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '*',
            Cell::Marked(player) => player.symbol(),
        }
    }
}

/// Outcome of evaluating a board.
///
/// Derived on demand from the cells, never stored. A win for X and a win
/// for O are distinct outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game is still in progress.
    Incomplete,
    /// Board is full with no winning line.
    Tie,
    /// X holds a winning line.
    XWins,
    /// O holds a winning line.
    OWins,
}

impl Status {
    /// Status for a win by the given player.
    pub fn win(player: Player) -> Self {
        match player {
            Player::X => Status::XWins,
            Player::O => Status::OWins,
        }
    }

    /// Returns the winning player, if the game has one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::XWins => Some(Player::X),
            Status::OWins => Some(Player::O),
            Status::Incomplete | Status::Tie => None,
        }
    }

    /// Checks if the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Incomplete)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Status::Incomplete => "in progress",
            Status::Tie => "tie",
            Status::XWins => "X wins",
            Status::OWins => "O wins",
        };
        write!(f, "{}", text)
    }
}
