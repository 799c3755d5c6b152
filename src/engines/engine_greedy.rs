use crate::engines::engine_trait::{ChosenMove, Policy, PolicyOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::jump_reachability::JumpChainGenerator;
use crate::move_generation::move_generator::MoveGenerator;

/// Single-ply greedy policy: every destination of every owned piece is
/// scored by net column displacement and the single best pair wins.
///
/// Ties keep the first-encountered candidate, so the pick is deterministic
/// for a fixed piece and destination iteration order (row-major pieces,
/// steps before jumps in coordinate order).
pub struct GreedyPolicy {
    move_generator: JumpChainGenerator,
}

impl GreedyPolicy {
    pub fn new() -> Self {
        Self {
            move_generator: JumpChainGenerator,
        }
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GreedyPolicy {
    fn choose_move(&mut self, game_state: &GameState) -> Result<PolicyOutput, String> {
        let player = game_state.current_player;

        let mut out = PolicyOutput::default();
        let mut best: Option<ChosenMove> = None;
        let mut candidates = 0usize;

        for from in game_state.board.pieces_of(player) {
            let moves = self
                .move_generator
                .reachable_from(&game_state.board, from)
                .map_err(|e| e.to_string())?;

            for destination in moves.ordered() {
                candidates += 1;
                // The heuristic only ever pursues reducing the column
                // coordinate, advancing toward the opposite side.
                let score = i32::from(from.col) - i32::from(destination.coord.col);
                if best.map_or(true, |b| score > b.score) {
                    best = Some(ChosenMove {
                        from,
                        to: destination.coord,
                        jumps: destination.jumps,
                        score,
                    });
                }
            }
        }

        out.info_lines.push(format!(
            "info string greedy_policy candidates {}",
            candidates
        ));
        if let Some(chosen) = best {
            out.info_lines.push(format!(
                "info string greedy_policy column_gain {}",
                chosen.score
            ));
        }
        out.best_move = best;
        Ok(out)
    }
}
