//! Minimal self-play harness for local testing.
//!
//! Drives a seeded random mover on the first seat against the greedy policy
//! seat through the real session path, without frontend I/O. Useful for
//! exercising the whole selection/commit/scheduling pipeline end to end.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use crate::game_state::checkers_types::{Coord, GameMode, Player};
use crate::move_generation::jump_reachability::JumpChainGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::session::turn_machine::{GameSession, AI_COMMIT_DELAY, AI_THINK_DELAY};

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Full turns (one move per seat counts as two).
    pub max_turns: u32,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 40,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub moves_played: usize,
    pub final_player: Player,
}

/// Plays `max_turns` moves of random-vs-greedy and reports how far the game
/// got. Deterministic for a fixed seed.
pub fn play_match(config: &MatchConfig) -> Result<MatchReport, String> {
    let mut session = GameSession::new();
    let mut now = Instant::now();
    session.set_mode(GameMode::HumanVsGreedyAi, now);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let generator = JumpChainGenerator;

    for _ in 0..config.max_turns {
        if session.is_ai_busy() {
            // Step the clock past both staging delays.
            now += AI_THINK_DELAY + AI_COMMIT_DELAY + Duration::from_millis(10);
            session.tick(now);
            continue;
        }

        if session.state().current_player != Player::One {
            break;
        }

        let mut candidates: Vec<(Coord, Coord)> = Vec::new();
        for from in session.state().board.pieces_of(Player::One) {
            let moves = generator
                .reachable_from(&session.state().board, from)
                .map_err(|e| e.to_string())?;
            candidates.extend(moves.ordered().iter().map(|d| (from, d.coord)));
        }

        let Some(&(from, to)) = candidates.as_slice().choose(&mut rng) else {
            break;
        };
        if !session.commit_move(from, to, now) {
            return Err(format!("generated move {from:?} -> {to:?} was rejected"));
        }
    }

    Ok(MatchReport {
        moves_played: session.state().move_history.len(),
        final_player: session.state().current_player,
    })
}
