use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Coord;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenerationError {
    OutOfBounds(Coord),
    EmptyStartCell(Coord),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::OutOfBounds(coord) => {
                write!(f, "start coordinate {coord:?} is off the board")
            }
            MoveGenerationError::EmptyStartCell(coord) => {
                write!(f, "no piece to move at {coord:?}")
            }
        }
    }
}

impl Error for MoveGenerationError {}

/// A legal destination together with the minimum number of chained jumps
/// needed to reach it. Zero means a plain single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub coord: Coord,
    pub jumps: u32,
}

/// The full destination set computed for one selected piece: adjacent empty
/// cells on one side, jump-chain landings with their minimum chain length on
/// the other. The two are disjoint move kinds; a turn is either one step or
/// one chain of jumps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachableMoves {
    /// Empty adjacent cells, in direction-table order.
    pub steps: Vec<Coord>,
    /// Jump landings mapped to minimum jump count, in coordinate order.
    pub jumps: BTreeMap<Coord, u32>,
}

impl ReachableMoves {
    pub fn contains(&self, coord: Coord) -> bool {
        self.steps.contains(&coord) || self.jumps.contains_key(&coord)
    }

    /// Minimum jump count for a destination, `Some(0)` for single steps.
    pub fn jump_count(&self, coord: Coord) -> Option<u32> {
        if self.steps.contains(&coord) {
            return Some(0);
        }
        self.jumps.get(&coord).copied()
    }

    /// The externally observable listing: single steps first, then jump
    /// destinations.
    pub fn ordered(&self) -> Vec<Destination> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.steps.iter().map(|&coord| Destination { coord, jumps: 0 }));
        out.extend(
            self.jumps
                .iter()
                .map(|(&coord, &jumps)| Destination { coord, jumps }),
        );
        out
    }

    pub fn len(&self) -> usize {
        self.steps.len() + self.jumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.jumps.is_empty()
    }
}

pub trait MoveGenerator: Send + Sync {
    fn reachable_from(&self, board: &Board, start: Coord) -> MoveGenResult<ReachableMoves>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_lists_steps_before_jumps() {
        let mut moves = ReachableMoves::default();
        moves.steps.push(Coord::new(4, 4));
        moves.jumps.insert(Coord::new(0, 0), 2);

        let ordered = moves.ordered();
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].coord, Coord::new(4, 4));
        assert_eq!(ordered[0].jumps, 0);
        assert_eq!(ordered[1].coord, Coord::new(0, 0));
        assert_eq!(ordered[1].jumps, 2);
    }

    #[test]
    fn jump_count_distinguishes_steps_from_chains() {
        let mut moves = ReachableMoves::default();
        moves.steps.push(Coord::new(1, 1));
        moves.jumps.insert(Coord::new(2, 2), 3);

        assert_eq!(moves.jump_count(Coord::new(1, 1)), Some(0));
        assert_eq!(moves.jump_count(Coord::new(2, 2)), Some(3));
        assert_eq!(moves.jump_count(Coord::new(3, 3)), None);
        assert!(moves.contains(Coord::new(1, 1)));
        assert!(!moves.contains(Coord::new(3, 3)));
    }
}
