//! Rules for evaluating a board.
//!
//! Pure functions over board state, separated from storage so they can be
//! tested and composed independently.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::board::Board;
use crate::types::Status;
use tracing::instrument;

/// Computes the status of a board.
///
/// Brute-force scan over the 8 winning lines: a uniformly marked line
/// decides the game; otherwise any empty cell leaves it incomplete and a
/// full board is a tie. The state is small enough that recomputing from
/// scratch on every query beats incremental tracking.
#[instrument(skip(board))]
pub fn game_status(board: &Board) -> Status {
    if let Some(winner) = check_winner(board) {
        return Status::win(winner);
    }
    if board.is_full() {
        Status::Tie
    } else {
        Status::Incomplete
    }
}
