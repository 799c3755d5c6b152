//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the cell grid for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coord, Player, COLS, ROWS};
use crate::game_state::game_state::GameState;

/// Render the board to a string for terminal output. Column labels wrap at
/// ten since the board is twenty cells wide.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..COLS {
        out.push(char::from(b'0' + (col % 10) as u8));
    }
    out.push('\n');

    for row in 0..ROWS {
        out.push(char::from(b'0' + row as u8));
        out.push_str("  ");
        for col in 0..COLS {
            match board.piece_at(Coord::new(row, col)) {
                Some(piece) => out.push(piece_glyph(piece.owner)),
                None => out.push('·'),
            }
        }
        out.push('\n');
    }

    out
}

/// Board view plus a turn line, the full diagnostic snapshot.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = render_board(&state.board);
    out.push_str(state.current_player.token());
    out.push_str(" to move");
    out
}

fn piece_glyph(owner: Player) -> char {
    match owner {
        Player::One => '1',
        Player::Two => '2',
    }
}
