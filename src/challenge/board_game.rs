use log::info;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cell::JumpLength;
use crate::challenge::{Challenge, ChallengeError, ChallengeKind};
use crate::observer::{LogObserver, Observer};
use crate::solver::BoardGameOutput;
use crate::validate::{InvalidInput, Validate, MAX_BOARD_SIZE, MIN_BOARD_CELLS, MIN_BOARD_SIZE};

/// Input to [`BoardGameChallenge`].
///
/// Validation does not require `board.len() == board_size`; a mismatch is answered with an all-zero output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardGameInput {
    /// Declared number of cells.
    pub board_size: usize,
    /// Fixed jump length of every cell.
    pub board: Vec<JumpLength>,
}

impl Validate for BoardGameInput {
    fn validate(&self) -> Result<(), InvalidInput> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(InvalidInput::BoardTooSmall(self.board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(InvalidInput::BoardTooLarge(self.board_size));
        }
        if self.board.len() < MIN_BOARD_CELLS {
            return Err(InvalidInput::TooFewCells(self.board.len()));
        }

        Ok(())
    }
}

impl From<&BoardGameInput> for Board {
    fn from(value: &BoardGameInput) -> Self {
        Board::new(value.board_size, value.board.clone())
    }
}

/// Solves a jump board, reporting the solution to an [`Observer`] (by default, the log).
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardGameChallenge<O = LogObserver> {
    observer: O,
}

impl<O: Observer> BoardGameChallenge<O> {
    /// A challenge reporting to `observer` instead of the log.
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }
}

impl<O: Observer> Challenge for BoardGameChallenge<O> {
    type Input = BoardGameInput;
    type Output = BoardGameOutput;

    fn kind(&self) -> ChallengeKind {
        ChallengeKind::BoardGame
    }

    fn execute(&self, input: &BoardGameInput) -> Result<BoardGameOutput, ChallengeError> {
        info!("board game challenge, board_size = {}", input.board_size);
        let solution = Board::from(input).solve_observed(&self.observer)?;

        Ok(solution.into())
    }
}
