//! Tests for status determination and board rendering.

use tictactoe_core::{game_status, Board, Move, Player, Position, Status};

#[test]
fn test_empty_board_incomplete() {
    let board = Board::new();
    assert_eq!(board.game_status(), Status::Incomplete);
    assert!(!board.game_status().is_over());
}

#[test]
fn test_left_column_win() {
    let mut board = Board::new();
    board.play(0, 'X').expect("valid move");
    board.play(1, 'O').expect("valid move");
    board.play(3, 'X').expect("valid move");
    board.play(2, 'O').expect("valid move");
    board.play(6, 'X').expect("valid move");

    assert_eq!(board.game_status(), Status::XWins);
    assert_eq!(board.game_status().winner(), Some(Player::X));
}

#[test]
fn test_tie_when_full_without_line() {
    // Final layout: X at 0, 1, 5, 6, 8 and O at 2, 3, 4, 7.
    let mut board = Board::new();
    for (pos, symbol) in [
        (0, 'X'),
        (2, 'O'),
        (1, 'X'),
        (3, 'O'),
        (5, 'X'),
        (4, 'O'),
        (6, 'X'),
        (7, 'O'),
        (8, 'X'),
    ] {
        board.play(pos, symbol).expect("valid move");
    }

    assert!(board.is_full());
    assert_eq!(board.game_status(), Status::Tie);
    assert_eq!(board.game_status().winner(), None);
}

#[test]
fn test_o_wins_middle_row_via_replay() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::MiddleLeft),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::BottomRight),
        Move::new(Player::O, Position::MiddleRight),
    ];

    let board = Board::replay(&moves).expect("valid replay");
    assert_eq!(board.game_status(), Status::OWins);
    assert_eq!(game_status(&board), Status::OWins);
}

#[test]
fn test_status_query_leaves_board_unchanged() {
    let mut board = Board::new();
    board.play(4, 'X').expect("valid move");

    let before = board.clone();
    let first = board.game_status();
    let second = board.game_status();

    assert_eq!(first, second);
    assert_eq!(board, before);
}

#[test]
fn test_display_rendering() {
    let mut board = Board::new();
    board.play(0, 'X').expect("valid move");
    board.play(4, 'O').expect("valid move");
    board.play(8, 'X').expect("valid move");

    assert_eq!(board.to_string(), "X * *\n* O *\n* * X");
}

#[test]
fn test_status_display() {
    assert_eq!(Status::Incomplete.to_string(), "in progress");
    assert_eq!(Status::Tie.to_string(), "tie");
    assert_eq!(Status::XWins.to_string(), "X wins");
    assert_eq!(Status::OWins.to_string(), "O wins");
}

#[test]
fn test_board_serializes_with_marks() {
    let mut board = Board::new();
    board.play(4, 'X').expect("valid move");

    let json = serde_json::to_value(&board).expect("serializable");
    assert_eq!(json["cells"][4], serde_json::json!({"Marked": "X"}));
    assert_eq!(json["cells"][0], serde_json::json!("Empty"));
}
