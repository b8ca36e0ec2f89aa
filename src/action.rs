//! First-class move actions.
//!
//! A move carries the player's intent and can be validated, serialized,
//! and replayed independently of the board that applies it.

use crate::board::Board;
use crate::error::InvalidMove;
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

impl Board {
    /// Applies a typed move.
    ///
    /// Performs the occupancy and turn-balance checks; the raw-input
    /// failures of [`Board::play`] are unrepresentable here.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        self.place(mv.position, mv.player)
    }

    /// Folds a move sequence onto a fresh board.
    ///
    /// Fails fast on the first illegal move.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Board, InvalidMove> {
        let mut board = Board::new();
        for mv in moves {
            board.play_move(*mv)?;
        }
        Ok(board)
    }
}
