//! Policy abstraction layer used by the session subsystem.
//!
//! Defines common output payloads so different move-picking strategies can
//! be selected at runtime behind a single trait interface.

use crate::game_state::checkers_types::Coord;
use crate::game_state::game_state::GameState;

/// A fully specified candidate move for the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Coord,
    pub to: Coord,
    pub jumps: u32,
    pub score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PolicyOutput {
    /// `None` when no owned piece has any destination; the turn then passes
    /// silently.
    pub best_move: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Policy: Send {
    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> Result<PolicyOutput, String>;
}
