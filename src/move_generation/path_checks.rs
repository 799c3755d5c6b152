//! Straight-line path validation shared by step and jump legality checks.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Coord;

/// Returns true when every intermediate cell between `start` and `end`
/// (exclusive of `end`) is free to pass through.
///
/// The single arithmetic midpoint of the segment may be occupied: that is
/// the piece being jumped over. The mover's own origin cell always blocks,
/// midpoint or not, so a jump vector can never clear the selected piece
/// itself.
///
/// Caller invariant: `start != end` and the displacement lies along one of
/// the eight unit directions; this is not re-validated here.
pub fn is_path_clear(board: &Board, start: Coord, end: Coord, mover: Coord) -> bool {
    let d_row = (end.row - start.row).signum();
    let d_col = (end.col - start.col).signum();

    let mid = Coord::new(
        start.row + (end.row - start.row) / 2,
        start.col + (end.col - start.col) / 2,
    );

    let mut current = Coord::new(start.row + d_row, start.col + d_col);
    while current != end {
        if current == mover {
            return false;
        }
        if current != mid && board.is_occupied(current) {
            return false;
        }
        current = Coord::new(current.row + d_row, current.col + d_col);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Piece, Player};

    const OFF_BOARD: Coord = Coord::new(-1, -1);

    #[test]
    fn every_aligned_pair_is_clear_on_an_empty_board() {
        let board = Board::empty();

        // Row, column, and both diagonals through (2, 5).
        let pairs = [
            (Coord::new(2, 5), Coord::new(2, 11)),
            (Coord::new(2, 5), Coord::new(2, 1)),
            (Coord::new(0, 5), Coord::new(4, 5)),
            (Coord::new(0, 3), Coord::new(4, 7)),
            (Coord::new(4, 3), Coord::new(0, 7)),
        ];
        for (a, b) in pairs {
            assert!(is_path_clear(&board, a, b, OFF_BOARD), "{a:?} -> {b:?}");
            assert!(is_path_clear(&board, b, a, OFF_BOARD), "{b:?} -> {a:?}");
        }
    }

    #[test]
    fn non_midpoint_blocker_stops_the_path() {
        let mut board = Board::empty();
        board.place(Coord::new(2, 8), Piece::new(Player::Two));

        assert!(!is_path_clear(
            &board,
            Coord::new(2, 5),
            Coord::new(2, 9),
            OFF_BOARD
        ));
    }

    #[test]
    fn midpoint_blocker_is_permitted() {
        let mut board = Board::empty();
        board.place(Coord::new(2, 7), Piece::new(Player::Two));

        assert!(is_path_clear(
            &board,
            Coord::new(2, 5),
            Coord::new(2, 9),
            OFF_BOARD
        ));
    }

    #[test]
    fn the_landing_cell_itself_is_not_inspected() {
        let mut board = Board::empty();
        board.place(Coord::new(2, 9), Piece::new(Player::Two));
        board.place(Coord::new(2, 7), Piece::new(Player::Two));

        assert!(is_path_clear(
            &board,
            Coord::new(2, 5),
            Coord::new(2, 9),
            OFF_BOARD
        ));
    }

    #[test]
    fn mover_origin_blocks_even_as_midpoint() {
        let mut board = Board::empty();
        let origin = Coord::new(2, 5);
        board.place(origin, Piece::new(Player::One));

        // Same segment, origin sitting exactly on the midpoint.
        assert!(!is_path_clear(
            &board,
            Coord::new(2, 3),
            Coord::new(2, 7),
            origin
        ));
        // And on a non-midpoint intermediate cell.
        assert!(!is_path_clear(
            &board,
            Coord::new(2, 4),
            Coord::new(2, 8),
            origin
        ));
    }
}
