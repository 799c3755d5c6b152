//! Serde payload types for the externally visible state contracts.
//!
//! These shapes are what the remote-state variant exchanges and must
//! round-trip exactly: coordinates as integer pairs, jump counts as
//! integers, and player identity as one of the two stable string tokens.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Coord, MoveRecord, Player};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::Destination;

/// Full board snapshot: the 5x20 row-major grid of owner tokens, the acting
/// player, and the move history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePayload {
    pub board: Vec<Vec<Option<Player>>>,
    pub current_player: Player,
    pub move_history: Vec<MoveRecord>,
}

impl StatePayload {
    pub fn from_game(state: &GameState) -> Self {
        Self {
            board: state.board.to_grid(),
            current_player: state.current_player,
            move_history: state.move_history.clone(),
        }
    }

    /// Rebuilds the board carried by this snapshot. `None` when the grid
    /// shape is wrong.
    pub fn to_board(&self) -> Option<Board> {
        Board::from_grid(&self.board)
    }
}

/// Response to the selection query: every legal destination as a
/// `[row, col, jumps]` triple, single steps first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectResponse {
    pub valid_moves: Vec<(i8, i8, u32)>,
    pub selected_piece: Option<Coord>,
}

impl SelectResponse {
    pub fn new(selected: Coord, destinations: &[Destination]) -> Self {
        Self {
            valid_moves: destinations
                .iter()
                .map(|d| (d.coord.row, d.coord.col, d.jumps))
                .collect(),
            selected_piece: Some(selected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from_row: i8,
    pub from_col: i8,
    pub to_row: i8,
    pub to_col: i8,
}

impl MoveRequest {
    pub fn from_coord(&self) -> Coord {
        Coord::new(self.from_row, self.from_col)
    }

    pub fn to_coord(&self) -> Coord {
        Coord::new(self.to_row, self.to_col)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StatePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MoveResponse {
    pub fn accepted(state: &GameState) -> Self {
        Self {
            success: true,
            state: Some(StatePayload::from_game(state)),
            message: None,
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            state: None,
            message: Some(message.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{COLS, ROWS};

    #[test]
    fn state_payload_uses_the_stable_player_tokens() {
        let payload = StatePayload::from_game(&GameState::new_game());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["currentPlayer"], "player1");
        assert_eq!(json["board"][0][0], "player1");
        assert_eq!(json["board"][0][19], "player2");
        assert!(json["board"][2][10].is_null());
        assert_eq!(json["board"].as_array().unwrap().len(), ROWS as usize);
        assert_eq!(
            json["board"][0].as_array().unwrap().len(),
            COLS as usize
        );
    }

    #[test]
    fn state_payload_round_trips_through_json() {
        let payload = StatePayload::from_game(&GameState::new_game());
        let json = serde_json::to_string(&payload).unwrap();
        let back: StatePayload = serde_json::from_str(&json).unwrap();

        assert_eq!(back, payload);
        assert_eq!(back.to_board(), Some(Board::new_game()));
    }

    #[test]
    fn select_response_keeps_triples_and_coordinate_pairs() {
        let destinations = [
            Destination {
                coord: Coord::new(2, 2),
                jumps: 0,
            },
            Destination {
                coord: Coord::new(2, 5),
                jumps: 2,
            },
        ];
        let response = SelectResponse::new(Coord::new(2, 1), &destinations);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["validMoves"][0][0], 2);
        assert_eq!(json["validMoves"][0][1], 2);
        assert_eq!(json["validMoves"][0][2], 0);
        assert_eq!(json["validMoves"][1][2], 2);
        assert_eq!(json["selectedPiece"]["row"], 2);
        assert_eq!(json["selectedPiece"]["col"], 1);

        let back: SelectResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn move_request_uses_camel_case_fields() {
        let request: MoveRequest =
            serde_json::from_str(r#"{"fromRow":2,"fromCol":1,"toRow":2,"toCol":2}"#).unwrap();
        assert_eq!(request.from_coord(), Coord::new(2, 1));
        assert_eq!(request.to_coord(), Coord::new(2, 2));
    }

    #[test]
    fn rejected_moves_omit_the_state_field() {
        let response = MoveResponse::rejected("Invalid move");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid move");
        assert!(json.get("state").is_none());
    }
}
