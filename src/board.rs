use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::cell::JumpLength;
use crate::graph::JumpGraph;
use crate::observer::{Observer, Silent};
use crate::solver::{JumpSolver, SolveError, Solution, MAX_COUNTABLE_SIZE};

/// A one-dimensional jump board: a declared size and the fixed jump length printed on each cell.
///
/// The declared size and the number of cells are kept separately so that a mismatch can be detected and
/// answered with [`Solution::DEGENERATE`] instead of an error.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<JumpLength>,
}

impl Board {
    /// Construct a board declared to have `size` cells with the given jump lengths.
    pub fn new(size: usize, cells: Vec<JumpLength>) -> Self {
        Self { size, cells }
    }

    /// The declared number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Jump lengths, one per cell.
    #[inline]
    pub fn cells(&self) -> &[JumpLength] {
        &self.cells
    }

    /// A board is degenerate if its declared size disagrees with its cells or it has no move to make.
    pub fn is_degenerate(&self) -> bool {
        self.cells.len() != self.size || self.size <= 1
    }

    /// Solves this board without observing the result. See [`Self::solve_observed`].
    pub fn solve(&self) -> Result<Solution, SolveError> {
        self.solve_observed(&Silent)
    }

    /// Computes the fewest moves to the goal, the chance of reaching it under uniformly random moves, and the
    /// number of distinct paths, then hands the result to `observer`.
    ///
    /// Degenerate boards yield [`Solution::DEGENERATE`] without building a graph.
    /// Returns [`Err`] only if the path count overflows. Boards over [`MAX_COUNTABLE_SIZE`] cells are rejected
    /// before their graph is built.
    pub fn solve_observed(&self, observer: &impl Observer) -> Result<Solution, SolveError> {
        if self.is_degenerate() {
            debug!("degenerate board: size {} with {} cells", self.size, self.cells.len());
            return Ok(Solution::DEGENERATE);
        }
        if self.size > MAX_COUNTABLE_SIZE {
            return Err(SolveError::BoardTooLarge { size: self.size });
        }

        let graph = JumpGraph::from(self);
        debug!("solving {} over {} edges", self, graph.edge_count());

        let solution = JumpSolver::from(&graph).solve()?;
        observer.observe(self, &solution);

        Ok(solution)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.cells.iter().join(" "))
    }
}
