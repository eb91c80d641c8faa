use log::info;

use crate::board::Board;
use crate::solver::Solution;

/// Receives every [`Solution`] produced by [`Board::solve_observed`].
///
/// Observation is a side channel only: an observer cannot change what the solve returns.
pub trait Observer {
    /// Called once per successful solve with the board and its computed metrics.
    fn observe(&self, board: &Board, solution: &Solution);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    fn observe(&self, _board: &Board, _solution: &Solution) {}
}

/// Observer that reports each metric through the [`log`] facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&self, board: &Board, solution: &Solution) {
        info!("board of {} cells: turns={}", board.size(), solution.reach.turns());
        info!("board of {} cells: probability={}", board.size(), solution.probability);
        info!("board of {} cells: combinations={}", board.size(), solution.combinations);
    }
}

impl<F> Observer for F
where
    F: Fn(&Board, &Solution),
{
    fn observe(&self, board: &Board, solution: &Solution) {
        self(board, solution)
    }
}
