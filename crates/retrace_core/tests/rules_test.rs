//! Tests for board evaluation.

use retrace_core::rules::LINES;
use retrace_core::{Board, GameStatus, Player, Position, Square, evaluate};
use strum::IntoEnumIterator;

fn board_from(marks: &str) -> Board {
    let mut board = Board::new();
    for (pos, mark) in Position::iter().zip(marks.chars()) {
        match mark {
            'X' => board.set(pos, Square::Occupied(Player::X)),
            'O' => board.set(pos, Square::Occupied(Player::O)),
            _ => {}
        }
    }
    board
}

#[test]
fn test_every_line_reports_winner_and_indices() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = line
                .iter()
                .fold(Board::new(), |b, p| b.with(*p, Square::Occupied(player)));
            let outcome = evaluate(&board);
            assert_eq!(outcome.winner(), Some(player));
            assert_eq!(outcome.winning_line(), Some(line));
            assert!(!outcome.is_draw());
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let outcome = evaluate(&board_from("XOXOXOOXO"));
    assert!(outcome.is_draw());
    assert_eq!(outcome.winner(), None);
    assert_eq!(outcome.winning_line(), None);
    assert_eq!(outcome.status(), GameStatus::Draw);
}

#[test]
fn test_partial_board_without_line_is_open() {
    let outcome = evaluate(&board_from("XO..X..O."));
    assert!(!outcome.is_draw());
    assert_eq!(outcome.winner(), None);
    assert_eq!(outcome.status(), GameStatus::InProgress);
}

#[test]
fn test_full_board_with_line_is_win_not_draw() {
    let outcome = evaluate(&board_from("XXXOOXXOO"));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert!(!outcome.is_draw());
}

#[test]
fn test_multiple_lines_keep_last_match() {
    // X: top row and center column.
    let outcome = evaluate(&board_from("XXXOXO.X."));
    assert_eq!(
        outcome.winning_line(),
        Some([Position::TopCenter, Position::Center, Position::BottomCenter])
    );
}

#[test]
fn test_evaluate_is_deterministic() {
    let board = board_from("OOOXXXOXX");
    assert_eq!(evaluate(&board), evaluate(&board));
    // Rows 0 and 1 both complete; row 1 comes later.
    assert_eq!(evaluate(&board).winner(), Some(Player::X));
}
