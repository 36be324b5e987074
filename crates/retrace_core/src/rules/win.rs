//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a row, column, or diagonal.
pub type Line = [Position; 3];

/// Every winning line, in evaluation order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the winning line and its owner, if any.
///
/// Every line is checked. When more than one line is complete (only
/// possible on boards that legal play cannot reach) the last one in
/// [`LINES`] order is reported.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES
        .iter()
        .filter_map(|&line| {
            let [a, b, c] = line;
            match board.get(a) {
                Square::Occupied(player)
                    if board.get(b) == Square::Occupied(player)
                        && board.get(c) == Square::Occupied(player) =>
                {
                    Some((player, line))
                }
                _ => None,
            }
        })
        .last()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn occupy(board: Board, player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(board, |b, pos| b.with(*pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = occupy(Board::new(), player, &line);
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = occupy(
            Board::new(),
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = occupy(Board::new(), Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = occupy(Board::new(), Player::X, &[Position::TopLeft, Position::TopCenter])
            .with(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_last_complete_line_is_reported() {
        // Top row and left column both complete; the column comes later.
        let board = occupy(
            Board::new(),
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(winning_line(&board), Some((Player::X, LINES[3])));
    }

    #[test]
    fn test_last_line_wins_across_players() {
        // X owns the top row, O owns the bottom row.
        let board = occupy(Board::new(), Player::X, &LINES[0]);
        let board = occupy(board, Player::O, &LINES[2]);
        assert_eq!(winning_line(&board), Some((Player::O, LINES[2])));
    }

    #[test]
    fn test_full_x_board_reports_anti_diagonal() {
        let all: Vec<Position> = Position::iter().collect();
        let board = occupy(Board::new(), Player::X, &all);
        assert_eq!(winning_line(&board), Some((Player::X, LINES[7])));
    }
}
