//! First-class invariants for board state.
//!
//! Invariants are properties that hold for every board reached through
//! validated moves. They are checked in debug builds after each mutation
//! and are testable independently.

use crate::board::Board;
use crate::types::Player;
use tracing::warn;

/// A property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts stay balanced.
///
/// The players alternate, so the mark counts never differ by more than one.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count_of(Player::X);
        let o = board.count_of(Player::O);

        let valid = x.abs_diff(o) <= 1;
        if !valid {
            warn!(x, o, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "mark counts balanced: counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;

    #[test]
    fn test_holds_for_empty_board() {
        let board = Board::new();
        assert!(MarkBalance::holds(&board));
    }

    #[test]
    fn test_holds_after_alternating_plays() {
        let mut board = Board::new();
        board.play(4, 'X').expect("valid move");
        board.play(0, 'O').expect("valid move");
        board.play(8, 'X').expect("valid move");
        assert!(MarkBalance::holds(&board));
    }

    #[test]
    fn test_detects_corrupted_grid() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Player::X));
        board.set(Position::TopCenter, Cell::Marked(Player::X));
        board.set(Position::TopRight, Cell::Marked(Player::X));
        assert!(!MarkBalance::holds(&board));
        assert!(!board.is_reachable());
    }

    #[test]
    fn test_detects_runaway_o_marks() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Marked(Player::O));
        board.set(Position::TopLeft, Cell::Marked(Player::O));
        assert!(!MarkBalance::holds(&board));
    }
}
