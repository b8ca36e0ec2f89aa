//! Winner detection.

use crate::board::Board;
use crate::types::Player;
use tracing::instrument;

/// Checks if a player holds a winning line.
///
/// Returns the player of the first uniformly marked line. At most one
/// player can hold a line on a board reached through validated moves, so
/// scan order does not matter.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for line in Board::LINES {
        let [a, b, c] = board.line(line);
        if !a.is_empty() && a == b && b == c {
            return a.player();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Player::X));
        board.set(Position::TopCenter, Cell::Marked(Player::X));
        board.set(Position::TopRight, Cell::Marked(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(Position::TopCenter, Cell::Marked(Player::O));
        board.set(Position::Center, Cell::Marked(Player::O));
        board.set(Position::BottomCenter, Cell::Marked(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Marked(Player::O));
        board.set(Position::Center, Cell::Marked(Player::O));
        board.set(Position::BottomLeft, Cell::Marked(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Player::X));
        board.set(Position::TopCenter, Cell::Marked(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
