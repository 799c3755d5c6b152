//! Core shared types for the checkers engine: players, pieces, coordinates,
//! game modes, and move-history records.

use serde::{Deserialize, Serialize};

/// Board height.
pub const ROWS: i8 = 5;
/// Board width.
pub const COLS: i8 = 20;

/// One of the two seats at the table.
///
/// The serialized tokens are part of the wire contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "player1")]
    One,
    #[serde(rename = "player2")]
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Stable wire token for this player.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Player::One => "player1",
            Player::Two => "player2",
        }
    }
}

/// A piece on the board. Pieces are created at setup and relocated on each
/// accepted move, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Player,
}

impl Piece {
    #[inline]
    pub const fn new(owner: Player) -> Self {
        Self { owner }
    }
}

/// Grid coordinate. On-board values satisfy `0 <= row < ROWS` and
/// `0 <= col < COLS`; scan arithmetic may step outside that range, which
/// `Board::in_bounds` rejects before any cell access.
///
/// Derived `Ord` gives row-major ordering, the fixed iteration order the
/// greedy tie-break and the destination listing rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// Who controls the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsGreedyAi,
}

/// One entry of the append-only move history. The engine never reads these
/// back; they exist for the presentation layer and the wire snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub from: Coord,
    pub to: Coord,
    pub timestamp: String,
}
