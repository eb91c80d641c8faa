//! Input rules applied by [`Challenge::run`](crate::Challenge::run) before a challenge executes.

use chrono::NaiveDate;

/// Largest board accepted by [`BoardGameInput`](crate::challenge::BoardGameInput) validation.
/// The path count of any board this size fits in a `u128`.
pub const MAX_BOARD_SIZE: usize = 64;

/// Smallest board accepted by validation.
pub const MIN_BOARD_SIZE: usize = 3;

/// Fewest cells a board listing may carry.
pub const MIN_BOARD_CELLS: usize = 2;

/// Reasons a challenge input is rejected before it is executed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// The string challenge needs at least one character.
    #[error("text must not be empty")]
    EmptyText,
    /// Sequence positions start at 1.
    #[error("position must be greater than 0, got {0}")]
    NonPositivePosition(i64),
    /// The board is smaller than [`MIN_BOARD_SIZE`].
    #[error("board_size must be at least {min}, got {0}", min = MIN_BOARD_SIZE)]
    BoardTooSmall(usize),
    /// The board is larger than [`MAX_BOARD_SIZE`].
    #[error("board_size must be at most {max}, got {0}", max = MAX_BOARD_SIZE)]
    BoardTooLarge(usize),
    /// Fewer than [`MIN_BOARD_CELLS`] cells were listed.
    #[error("board must list at least {min} cells, got {0}", min = MIN_BOARD_CELLS)]
    TooFewCells(usize),
    /// Salaries must be strictly positive and finite.
    #[error("salary must be a positive number, got {0}")]
    NonPositiveSalary(f64),
    /// The employment period runs backwards.
    #[error("resignation_date {resignation} must not be before hire_date {hire}")]
    ResignationBeforeHire {
        /// Date of hire.
        hire: NaiveDate,
        /// Date of resignation.
        resignation: NaiveDate,
    },
}

/// Input records that can check themselves before being executed.
pub trait Validate {
    /// Returns the first rule this input breaks, if any.
    fn validate(&self) -> Result<(), InvalidInput>;
}
