//! Aggregate game state: board, acting player, transient selection with its
//! computed destinations, and the append-only move history.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coord, MoveRecord, Player};
use crate::move_generation::move_generator::ReachableMoves;

/// The active selection: one piece and the destination set computed for it.
/// Rebuilt from scratch on every new selection, discarded on deselection.
#[derive(Debug, Clone)]
pub struct Selection {
    pub coord: Coord,
    pub moves: ReachableMoves,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub selection: Option<Selection>,
    pub move_history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new_game() -> Self {
        Self {
            board: Board::new_game(),
            current_player: Player::One,
            selection: None,
            move_history: Vec::new(),
        }
    }

    #[inline]
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    #[inline]
    pub fn switch_players(&mut self) {
        self.current_player = self.current_player.opposite();
    }

    /// Whether `coord` is currently selected.
    pub fn is_selected(&self, coord: Coord) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.coord == coord)
    }
}
