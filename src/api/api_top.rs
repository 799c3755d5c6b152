//! Command front-end and line protocol loop.
//!
//! Parses text commands, maintains the live game session, routes selection
//! and move requests, and emits one JSON payload line per response plus
//! `info string` diagnostics. The payload lines carry the same shapes the
//! remote-state variant exchanges.

use std::io::{self, Write};
use std::time::Instant;

use crate::game_state::checkers_types::{Coord, GameMode};
use crate::session::turn_machine::{GameSession, SessionEvent};
use crate::utils::render_board::render_game_state;
use crate::wire::payloads::{MoveResponse, ResetResponse, SelectResponse, StatePayload};

pub struct ApiState {
    session: GameSession,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Writes the full state snapshot as one JSON line.
    pub fn write_state(&self, out: &mut impl Write) -> io::Result<()> {
        write_json(out, &StatePayload::from_game(self.session.state()))
    }

    /// Handles one command line. Returns true when the loop should quit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let now = Instant::now();
        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "state" => {
                self.write_state(out)?;
            }
            "select" => match parse_coord(&mut parts) {
                Some(coord) => {
                    let destinations = self.session.select(coord);
                    write_json(out, &SelectResponse::new(coord, &destinations))?;
                }
                None => writeln!(out, "info string usage: select ROW COL")?,
            },
            "move" => match (parse_coord(&mut parts), parse_coord(&mut parts)) {
                (Some(from), Some(to)) => {
                    let response = if self.session.commit_move(from, to, now) {
                        MoveResponse::accepted(self.session.state())
                    } else {
                        MoveResponse::rejected("Invalid move")
                    };
                    write_json(out, &response)?;
                }
                _ => writeln!(out, "info string usage: move ROW COL ROW COL")?,
            },
            "reset" => {
                self.session.reset();
                write_json(out, &ResetResponse { success: true })?;
                self.write_state(out)?;
            }
            "mode" => match parts.next() {
                Some("human") => {
                    self.session.set_mode(GameMode::HumanVsHuman, now);
                    writeln!(out, "info string mode human_vs_human")?;
                }
                Some("ai") => {
                    self.session.set_mode(GameMode::HumanVsGreedyAi, now);
                    writeln!(out, "info string mode human_vs_greedy_ai")?;
                }
                _ => writeln!(out, "info string usage: mode human|ai")?,
            },
            "render" => {
                writeln!(out, "{}", render_game_state(self.session.state()))?;
            }
            "quit" => return Ok(true),
            _ => {
                writeln!(out, "info string unknown command: {cmd}")?;
            }
        }

        Ok(false)
    }

    /// Pumps the session scheduler so staged AI turns progress between
    /// commands. Emits the snapshot line after every committed AI move.
    pub fn tick(&mut self, out: &mut impl Write) -> io::Result<()> {
        for event in self.session.tick(Instant::now()) {
            match event {
                SessionEvent::AiSelected { from, to, jumps } => {
                    writeln!(
                        out,
                        "info string ai selected {} {} -> {} {} jumps {}",
                        from.row, from.col, to.row, to.col, jumps
                    )?;
                }
                SessionEvent::AiMoved { from, to } => {
                    writeln!(
                        out,
                        "info string ai moved {} {} -> {} {}",
                        from.row, from.col, to.row, to.col
                    )?;
                    self.write_state(out)?;
                }
                SessionEvent::AiPassed => {
                    writeln!(out, "info string ai passed")?;
                }
                SessionEvent::Info(line) => writeln!(out, "{line}")?,
            }
        }
        Ok(())
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_coord<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Option<Coord> {
    let row = parts.next()?.parse::<i8>().ok()?;
    let col = parts.next()?.parse::<i8>().ok()?;
    Some(Coord::new(row, col))
}

fn write_json(out: &mut impl Write, payload: &impl serde::Serialize) -> io::Result<()> {
    let line = serde_json::to_string(payload).map_err(io::Error::other)?;
    writeln!(out, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(api: &mut ApiState, command: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = api.handle_command(command, &mut out).unwrap();
        (quit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn state_command_emits_a_parseable_snapshot() {
        let mut api = ApiState::new();
        let (quit, output) = run(&mut api, "state");

        assert!(!quit);
        let payload: StatePayload = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(payload.to_board(), Some(crate::game_state::board::Board::new_game()));
    }

    #[test]
    fn select_and_move_round_trip_through_the_protocol() {
        let mut api = ApiState::new();

        let (_, output) = run(&mut api, "select 2 1");
        let select: SelectResponse = serde_json::from_str(output.trim()).unwrap();
        assert!(select.valid_moves.contains(&(2, 2, 0)));

        let (_, output) = run(&mut api, "move 2 1 2 2");
        let response: MoveResponse = serde_json::from_str(output.trim()).unwrap();
        assert!(response.success);
        let state = response.state.unwrap();
        assert_eq!(state.current_player.token(), "player2");

        let (_, output) = run(&mut api, "move 2 2 2 10");
        let response: MoveResponse = serde_json::from_str(output.trim()).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid move"));
    }

    #[test]
    fn selecting_an_opponent_piece_yields_no_destinations() {
        let mut api = ApiState::new();
        let (_, output) = run(&mut api, "select 0 19");
        let select: SelectResponse = serde_json::from_str(output.trim()).unwrap();
        assert!(select.valid_moves.is_empty());
    }

    #[test]
    fn reset_emits_confirmation_and_a_fresh_snapshot() {
        let mut api = ApiState::new();
        run(&mut api, "move 2 1 2 2");

        let (_, output) = run(&mut api, "reset");
        let mut lines = output.lines();
        let confirmation: ResetResponse =
            serde_json::from_str(lines.next().unwrap()).unwrap();
        assert!(confirmation.success);
        let payload: StatePayload = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert!(payload.move_history.is_empty());
        assert_eq!(payload.current_player.token(), "player1");
    }

    #[test]
    fn malformed_and_unknown_commands_answer_with_info_lines() {
        let mut api = ApiState::new();

        let (_, output) = run(&mut api, "select one two");
        assert!(output.starts_with("info string usage"));

        let (_, output) = run(&mut api, "flip");
        assert!(output.starts_with("info string unknown command"));

        let (quit, _) = run(&mut api, "quit");
        assert!(quit);
    }
}
