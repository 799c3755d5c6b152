//! Turn state machine and move executor.
//!
//! `GameSession` owns the complete mutable game state and funnels every
//! mutation through one place: cell activations from a human seat, and
//! scheduled tasks for the AI seat. Selecting a piece computes its
//! destination set; activating a listed destination commits the move,
//! clears the transient selection, and flips the acting player.

use std::time::{Duration, Instant};

use crate::engines::engine_greedy::GreedyPolicy;
use crate::engines::engine_trait::Policy;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coord, GameMode, MoveRecord, Player};
use crate::game_state::game_state::{GameState, Selection};
use crate::move_generation::jump_reachability::JumpChainGenerator;
use crate::move_generation::move_generator::{Destination, MoveGenerator};
use crate::session::scheduler::{AiTask, Scheduler};

/// The seat the policy plays when the mode enables it.
pub const AI_SEAT: Player = Player::Two;

/// Thinking pause before the AI's selection becomes visible.
pub const AI_THINK_DELAY: Duration = Duration::from_millis(600);
/// Shorter pause between the visible selection and the committed move.
pub const AI_COMMIT_DELAY: Duration = Duration::from_millis(250);

/// What a cell activation did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// No piece, an opponent piece, or input arriving while the AI acts.
    Ignored,
    Selected(Coord),
    /// A non-destination cell was activated while a piece was selected.
    SelectionCleared,
    MoveApplied { from: Coord, to: Coord },
}

/// Deferred happenings surfaced to the frontend by `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    AiSelected { from: Coord, to: Coord, jumps: u32 },
    AiMoved { from: Coord, to: Coord },
    /// The policy found no destination for any owned piece; the turn passed
    /// without a move.
    AiPassed,
    Info(String),
}

/// Answer to the selection query: which cell is selected and whether its
/// piece belongs to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionQuery {
    pub selected_coordinate: Coord,
    pub owner_matches_current_player: bool,
}

pub struct GameSession {
    state: GameState,
    mode: GameMode,
    scheduler: Scheduler,
    ai_busy: bool,
    policy: Box<dyn Policy>,
    generator: JumpChainGenerator,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_policy(Box::new(GreedyPolicy::new()))
    }

    pub fn with_policy(policy: Box<dyn Policy>) -> Self {
        Self {
            state: GameState::new_game(),
            mode: GameMode::HumanVsHuman,
            scheduler: Scheduler::new(),
            ai_busy: false,
            policy,
            generator: JumpChainGenerator,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn is_ai_busy(&self) -> bool {
        self.ai_busy
    }

    /// The click path. Implements the selection state machine: with no
    /// selection, a cell holding one of the acting player's pieces becomes
    /// selected and anything else is ignored; with a selection, a listed
    /// destination commits the move and anything else clears the selection
    /// without switching players.
    pub fn handle_cell_activation(&mut self, coord: Coord, now: Instant) -> ActivationOutcome {
        if self.ai_busy || !Board::in_bounds(coord) {
            return ActivationOutcome::Ignored;
        }

        if let Some(selection) = self.state.selection.clone() {
            if selection.moves.contains(coord) {
                let from = selection.coord;
                self.apply_move(from, coord, now);
                return ActivationOutcome::MoveApplied { from, to: coord };
            }
            self.state.clear_selection();
            return ActivationOutcome::SelectionCleared;
        }

        match self.state.board.piece_at(coord) {
            Some(piece) if piece.owner == self.state.current_player => {
                self.select_piece(coord);
                ActivationOutcome::Selected(coord)
            }
            _ => ActivationOutcome::Ignored,
        }
    }

    /// Selection query: reports the piece at `coord` and whether it belongs
    /// to the acting player. `None` when the cell is empty.
    pub fn selection_query(&self, coord: Coord) -> Option<SelectionQuery> {
        if !Board::in_bounds(coord) {
            return None;
        }
        self.state.board.piece_at(coord).map(|piece| SelectionQuery {
            selected_coordinate: coord,
            owner_matches_current_player: piece.owner == self.state.current_player,
        })
    }

    /// Explicit select command: clears any previous selection, then selects
    /// the piece at `coord` when it belongs to the acting player. Returns
    /// the ordered destination listing, empty when nothing was selected.
    pub fn select(&mut self, coord: Coord) -> Vec<Destination> {
        self.state.clear_selection();
        if self.ai_busy || !Board::in_bounds(coord) {
            return Vec::new();
        }
        match self.state.board.piece_at(coord) {
            Some(piece) if piece.owner == self.state.current_player => {
                self.select_piece(coord);
                self.move_options(coord).unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    /// Ordered destination listing for the currently selected cell. `None`
    /// when `coord` is not the active selection.
    pub fn move_options(&self, coord: Coord) -> Option<Vec<Destination>> {
        self.state
            .selection
            .as_ref()
            .filter(|selection| selection.coord == coord)
            .map(|selection| selection.moves.ordered())
    }

    /// Move-commit command: validates ownership and destination legality
    /// from scratch, then applies. Returns whether the move was accepted.
    pub fn commit_move(&mut self, from: Coord, to: Coord, now: Instant) -> bool {
        if self.ai_busy || !Board::in_bounds(from) || !Board::in_bounds(to) {
            return false;
        }
        match self.state.board.piece_at(from) {
            Some(piece) if piece.owner == self.state.current_player => {}
            _ => return false,
        }
        let Ok(moves) = self.generator.reachable_from(&self.state.board, from) else {
            return false;
        };
        if !moves.contains(to) {
            return false;
        }
        self.apply_move(from, to, now);
        true
    }

    /// Restores the canonical starting board with Player One to act. Any
    /// staged AI work is dropped with the rest of the transient state.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
        self.scheduler.clear();
        self.ai_busy = false;
        self.policy.new_game();
    }

    /// Switches who controls the second seat. Takes effect immediately: when
    /// the AI seat is already to act, its turn is staged right away. An AI
    /// move already in flight is never aborted and will still commit.
    pub fn set_mode(&mut self, mode: GameMode, now: Instant) {
        self.mode = mode;
        if mode == GameMode::HumanVsGreedyAi
            && self.state.current_player == AI_SEAT
            && !self.ai_busy
        {
            self.begin_ai_turn(now);
        }
    }

    /// Drains due scheduler tasks. Call from the frontend loop; wall-clock
    /// gaps between stages are arbitrary and the session tolerates them.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for task in self.scheduler.pop_due(now) {
            match task {
                AiTask::SelectBestMove => self.run_ai_selection(now, &mut events),
                AiTask::CommitMove { from, to } => {
                    self.ai_busy = false;
                    self.apply_move(from, to, now);
                    events.push(SessionEvent::AiMoved { from, to });
                }
            }
        }
        events
    }

    fn select_piece(&mut self, coord: Coord) {
        let moves = self
            .generator
            .reachable_from(&self.state.board, coord)
            .expect("selection targets an occupied in-bounds cell");
        self.state.selection = Some(Selection { coord, moves });
    }

    fn apply_move(&mut self, from: Coord, to: Coord, now: Instant) {
        self.state.board.relocate(from, to);
        self.state.move_history.push(MoveRecord {
            player: self.state.current_player,
            from,
            to,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        });
        self.state.clear_selection();
        self.state.switch_players();

        if self.mode == GameMode::HumanVsGreedyAi
            && self.state.current_player == AI_SEAT
            && !self.ai_busy
        {
            self.begin_ai_turn(now);
        }
    }

    fn begin_ai_turn(&mut self, now: Instant) {
        self.ai_busy = true;
        self.scheduler
            .schedule(AiTask::SelectBestMove, now + AI_THINK_DELAY);
    }

    fn run_ai_selection(&mut self, now: Instant, events: &mut Vec<SessionEvent>) {
        let output = match self.policy.choose_move(&self.state) {
            Ok(output) => output,
            Err(message) => {
                self.ai_busy = false;
                events.push(SessionEvent::Info(format!(
                    "info string policy error {message}"
                )));
                return;
            }
        };

        for line in output.info_lines {
            events.push(SessionEvent::Info(line));
        }

        match output.best_move {
            Some(chosen) => {
                self.select_piece(chosen.from);
                events.push(SessionEvent::AiSelected {
                    from: chosen.from,
                    to: chosen.to,
                    jumps: chosen.jumps,
                });
                self.scheduler.schedule(
                    AiTask::CommitMove {
                        from: chosen.from,
                        to: chosen.to,
                    },
                    now + AI_COMMIT_DELAY,
                );
            }
            None => {
                self.ai_busy = false;
                self.state.switch_players();
                events.push(SessionEvent::AiPassed);
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
