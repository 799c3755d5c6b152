//! Breadth-first search over jump chains, the move-generation core.
//!
//! Single steps are not part of the search graph; they are collected
//! separately as zero-jump destinations. The search explores chains of one
//! or more jumps, where each jump clears the first piece found in a
//! direction and lands the same distance beyond it, so a run of empty cells
//! before the jumped piece scales the landing distance proportionally.

use std::collections::{BTreeMap, VecDeque};

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Coord;
use crate::move_generation::move_generator::{
    MoveGenResult, MoveGenerationError, MoveGenerator, ReachableMoves,
};
use crate::move_generation::path_checks::is_path_clear;

/// The eight neighbor offsets: the 3x3 block minus the zero vector.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct JumpChainGenerator;

impl MoveGenerator for JumpChainGenerator {
    fn reachable_from(&self, board: &Board, start: Coord) -> MoveGenResult<ReachableMoves> {
        if !Board::in_bounds(start) {
            return Err(MoveGenerationError::OutOfBounds(start));
        }
        if !board.is_occupied(start) {
            return Err(MoveGenerationError::EmptyStartCell(start));
        }

        let mut moves = ReachableMoves::default();

        // Single steps: adjacent empty cells. Never chained with jumps.
        for (d_row, d_col) in DIRECTIONS {
            let target = Coord::new(start.row + d_row, start.col + d_col);
            if Board::in_bounds(target) && !board.is_occupied(target) {
                moves.steps.push(target);
            }
        }

        // Jump chains. The queue is FIFO and every edge costs one jump, so
        // the first time a cell is dequeued its jump count is minimal;
        // deduplication therefore happens at dequeue time.
        let mut visited: BTreeMap<Coord, u32> = BTreeMap::new();
        let mut queue: VecDeque<(Coord, u32)> = VecDeque::new();
        queue.push_back((start, 0));

        while let Some((cell, jumps)) = queue.pop_front() {
            if visited.get(&cell).is_some_and(|&best| best <= jumps) {
                continue;
            }
            visited.insert(cell, jumps);

            for (d_row, d_col) in DIRECTIONS {
                // Scan outward for the first piece in this direction. It is
                // the only jump candidate: a nearer piece is an obstacle,
                // never a choice point.
                let mut step: i8 = 1;
                loop {
                    let probe = Coord::new(cell.row + d_row * step, cell.col + d_col * step);
                    if !Board::in_bounds(probe) {
                        break;
                    }
                    if board.is_occupied(probe) {
                        // A piece never jumps over its own starting cell.
                        if probe != start {
                            try_enqueue_jump(
                                board,
                                start,
                                cell,
                                (d_row, d_col),
                                step,
                                jumps,
                                &visited,
                                &mut queue,
                            );
                        }
                        break;
                    }
                    step += 1;
                }
            }
        }

        visited.remove(&start);
        moves.jumps = visited;
        Ok(moves)
    }
}

/// Validates the landing cell for a jump over the piece found `step` cells
/// away from `cell` and enqueues it when it improves on what is known.
#[allow(clippy::too_many_arguments)]
fn try_enqueue_jump(
    board: &Board,
    origin: Coord,
    cell: Coord,
    (d_row, d_col): (i8, i8),
    step: i8,
    jumps: u32,
    visited: &BTreeMap<Coord, u32>,
    queue: &mut VecDeque<(Coord, u32)>,
) {
    // The landing distance scales with the distance to the jumped piece.
    let landing = Coord::new(cell.row + d_row * step * 2, cell.col + d_col * step * 2);
    if !Board::in_bounds(landing) {
        return;
    }
    if board.is_occupied(landing) {
        return;
    }
    if !is_path_clear(board, cell, landing, origin) {
        return;
    }

    let total = jumps + 1;
    if visited.get(&landing).map_or(true, |&best| total < best) {
        queue.push_back((landing, total));
    }
}
