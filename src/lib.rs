#![warn(missing_docs)]

//! # `springboard`
//!
//! A solver for a one-dimensional jump board, plus the small calculators served next to it.
//!
//! A board is a row of `n` cells, each printed with a jump length. From cell `i` a player may take the *fixed*
//! jump to `i + board[i]` (if it stays on the board) or a *free* jump to any later cell. Build a [`Board`] and
//! call [`solve()`](Board::solve) to get a [`Solution`]:
//! - the fewest moves from cell `0` to the last cell, found by breadth-first search;
//! - the chance of reaching the last cell when each available move is equally likely, found by a backward pass;
//! - the number of distinct move sequences reaching the last cell, found by a second backward pass.
//!
//! Boards whose declared size disagrees with their cells, or with fewer than two cells, are degenerate and solve
//! to [`Solution::DEGENERATE`] rather than an error.
//!
//! # Internals
//! The moves are materialised as a directed [`petgraph`] multigraph rebuilt on every solve. A fixed jump that
//! lands where a free jump also lands is a second, parallel edge, and a zero-length jump is a self loop; both
//! count as distinct moves in the averages and path counts.
//!
//! # Challenges
//! The [`challenge`] module wraps the solver and three unrelated calculators behind the [`Challenge`] trait,
//! pairing each with the input validation of [`validate`].

pub use board::Board;
pub use cell::{Cell, Jump, JumpLength};
pub use challenge::{Challenge, ChallengeError, ChallengeKind};
pub use observer::{LogObserver, Observer, Silent};
pub use solver::{BoardGameOutput, Reach, SolveError, Solution, MAX_COUNTABLE_SIZE};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub mod challenge;
pub(crate) mod graph;
pub(crate) mod observer;
pub(crate) mod solver;
pub mod validate;
#[cfg(feature = "wasm")]
pub mod wasm;
