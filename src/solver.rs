use std::collections::{HashSet, VecDeque};
use std::num::NonZero;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::graph::JumpGraph;

/// Largest board whose path count can fit in a `u128`.
///
/// Free jumps alone give a board of `n` cells `2^(n - 2)` paths, so from 130 cells on the count always overflows.
pub const MAX_COUNTABLE_SIZE: usize = 129;

/// Reasons solving a board may fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// The number of distinct paths no longer fits in a `u128`.
    /// Boards accepted by [`BoardGameInput`](crate::challenge::BoardGameInput) validation never get here.
    #[error("path count overflowed while counting paths out of cell {cell}")]
    CombinationsOverflow {
        /// The cell whose count could not be represented.
        cell: Cell,
    },
    /// The board has more than [`MAX_COUNTABLE_SIZE`] cells, so its path count cannot be represented.
    #[error("board of {size} cells has too many paths to count, at most {max} cells are supported", max = MAX_COUNTABLE_SIZE)]
    BoardTooLarge {
        /// The declared number of cells.
        size: usize,
    },
}

/// Whether the goal can be reached, and if so in how few moves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Reach {
    /// The goal is reachable in this many moves.
    Reached(NonZero<usize>),
    /// No sequence of moves leads to the goal, or the board is degenerate.
    Unreachable,
}

impl Reach {
    /// The move count as reported on the wire, where `0` stands for [`Reach::Unreachable`].
    pub fn turns(&self) -> usize {
        match self {
            Self::Reached(turns) => turns.get(),
            Self::Unreachable => 0,
        }
    }
}

/// The three metrics computed for a board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Fewest moves from the start to the goal.
    pub reach: Reach,
    /// Chance of reaching the goal when every move out of a cell is equally likely.
    pub probability: f64,
    /// Number of distinct move sequences from the start to the goal.
    pub combinations: u128,
}

impl Solution {
    /// The all-zero result returned for degenerate boards.
    pub const DEGENERATE: Self = Self {
        reach: Reach::Unreachable,
        probability: 0.0,
        combinations: 0,
    };
}

/// The flat `{turns, probability, combinations}` record handed to callers outside the crate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGameOutput {
    /// Fewest moves to the goal, `0` when unreachable.
    pub turns: usize,
    /// Chance of reaching the goal under uniformly random moves.
    pub probability: f64,
    /// Number of distinct move sequences reaching the goal.
    pub combinations: u128,
}

impl From<Solution> for BoardGameOutput {
    fn from(value: Solution) -> Self {
        Self {
            turns: value.reach.turns(),
            probability: value.probability,
            combinations: value.combinations,
        }
    }
}

/// Runs the three passes over a [`JumpGraph`]. None of them depend on one another.
pub(crate) struct JumpSolver<'a> {
    graph: &'a JumpGraph,
}

impl<'a> From<&'a JumpGraph> for JumpSolver<'a> {
    fn from(graph: &'a JumpGraph) -> Self {
        Self { graph }
    }
}

impl JumpSolver<'_> {
    pub(crate) fn solve(&self) -> Result<Solution, SolveError> {
        Ok(Solution {
            reach: self.shortest_path(),
            probability: self.probability(),
            combinations: self.combinations()?,
        })
    }

    /// Breadth-first search from the start. Cells leave the queue in non-decreasing distance order, so the first
    /// time the goal is popped its distance is minimal.
    pub(crate) fn shortest_path(&self) -> Reach {
        let Some(goal) = self.graph.goal() else {
            return Reach::Unreachable;
        };

        let mut visited = HashSet::from([0]);
        let mut queue = VecDeque::from([(0 as Cell, 0usize)]);

        while let Some((cell, distance)) = queue.pop_front() {
            if cell == goal {
                trace!("goal popped at distance {distance}");
                return NonZero::new(distance).map_or(Reach::Unreachable, Reach::Reached);
            }

            for target in self.graph.targets(cell) {
                // insert returns false for cells already queued
                if visited.insert(target) {
                    queue.push_back((target, distance + 1));
                }
            }
        }

        Reach::Unreachable
    }

    /// Backward pass averaging the chance of every move out of each cell.
    ///
    /// A self loop reads the cell's own entry before it is written, so it adds a move that never succeeds.
    pub(crate) fn probability(&self) -> f64 {
        let Some(goal) = self.graph.goal() else {
            return 0.0;
        };

        let mut chance = vec![0.0f64; self.graph.size()];
        chance[goal] = 1.0;

        for cell in (0..goal).rev() {
            let targets = self.graph.targets(cell);
            if targets.is_empty() {
                continue;
            }

            chance[cell] = targets.iter().map(|target| chance[*target]).sum::<f64>() / targets.len() as f64;
        }

        chance[0]
    }

    /// Backward pass summing the path counts of every move out of each cell, parallel moves counted separately.
    pub(crate) fn combinations(&self) -> Result<u128, SolveError> {
        let Some(goal) = self.graph.goal() else {
            return Ok(0);
        };

        let mut paths = vec![0u128; self.graph.size()];
        paths[goal] = 1;

        for cell in (0..goal).rev() {
            paths[cell] = self.graph.targets(cell).into_iter()
                .try_fold(0u128, |total, target| total.checked_add(paths[target]))
                .ok_or(SolveError::CombinationsOverflow { cell })?;
        }

        Ok(paths[0])
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::board::Board;
    use crate::graph::JumpGraph;
    use crate::solver::{BoardGameOutput, JumpSolver, Reach, SolveError, Solution};

    fn solve(size: usize, cells: Vec<u32>) -> Result<Solution, SolveError> {
        let board = Board::new(size, cells);
        let graph = JumpGraph::from(&board);
        JumpSolver::from(&graph).solve()
    }

    #[test]
    fn goal_always_one_free_jump_away() {
        let solution = solve(6, vec![1, 1, 1, 1, 1, 1]).unwrap();
        assert_eq!(solution.reach, Reach::Reached(NonZero::new(1).unwrap()));
    }

    #[test]
    fn two_cell_board() {
        let solution = solve(2, vec![5, 5]).unwrap();
        assert_eq!(solution.reach.turns(), 1);
        assert_eq!(solution.probability, 1.0);
        assert_eq!(solution.combinations, 1);
    }

    #[test]
    fn counts_parallel_edges_separately() {
        // cell 2: {3, 3}; cell 1: {2, 2, 3}; cell 0: {1, 1, 2, 3}
        let solution = solve(4, vec![1, 1, 1, 1]).unwrap();
        assert_eq!(solution.combinations, 13);
        assert_eq!(solution.probability, 1.0);
    }

    #[test]
    fn self_loop_dilutes_probability() {
        // cell 0 may jump to itself, which never reaches the goal
        let solution = solve(3, vec![0, 1, 1]).unwrap();
        assert!((solution.probability - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(solution.combinations, 3);
        assert_eq!(solution.reach.turns(), 1);
    }

    #[test]
    fn all_zero_board() {
        // cell 1: {1, 2} gives 1/2 and one path; cell 0: {0, 1, 2}
        let solution = solve(3, vec![0, 0, 0]).unwrap();
        assert!((solution.probability - 0.5).abs() < 1e-12);
        assert_eq!(solution.combinations, 2);
    }

    #[test]
    fn overflow_is_reported() {
        let result = solve(100, vec![1; 100]);
        assert!(matches!(result, Err(SolveError::CombinationsOverflow { .. })));
    }

    #[test]
    fn unreachable_maps_to_zero_turns() {
        let output = BoardGameOutput::from(Solution::DEGENERATE);
        assert_eq!(output, BoardGameOutput { turns: 0, probability: 0.0, combinations: 0 });
    }
}
