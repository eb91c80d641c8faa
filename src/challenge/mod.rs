//! The four calculators, each an implementation of [`Challenge`].
//!
//! Inputs carry their own validation rules (see [`Validate`]); [`Challenge::run`] applies them before
//! [`Challenge::execute`] does the work.

use serde_json::{json, Value};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::solver::SolveError;
use crate::validate::{InvalidInput, Validate};

pub use benefits::{BenefitsChallenge, BenefitsInput, BenefitsOutput};
pub use board_game::{BoardGameChallenge, BoardGameInput};
pub use sequence::{SequenceChallenge, SequenceInput, SequenceOutput};
pub use string::{StringChallenge, StringInput, StringOutput};

mod benefits;
mod board_game;
mod sequence;
mod string;

/// Reasons a challenge may fail.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChallengeError {
    /// The input broke a validation rule.
    #[error("invalid input: {0}")]
    Invalid(#[from] InvalidInput),
    /// The board solver could not represent its result.
    #[error("board solver failed: {0}")]
    Solve(#[from] SolveError),
    /// The requested sequence term does not fit in an `i64`.
    #[error("sequence term at position {position} overflows")]
    SequenceOverflow {
        /// The requested position.
        position: i64,
    },
}

/// Something that maps a validated input record to an output record.
pub trait Challenge {
    /// The input record, which knows how to validate itself.
    type Input: Validate;
    /// The output record.
    type Output;

    /// Which challenge this is.
    fn kind(&self) -> ChallengeKind;

    /// Run the challenge on an input that is assumed to be valid.
    fn execute(&self, input: &Self::Input) -> Result<Self::Output, ChallengeError>;

    /// Validate `input`, then [`execute`](Self::execute) it.
    fn run(&self, input: &Self::Input) -> Result<Self::Output, ChallengeError> {
        input.validate()?;
        self.execute(input)
    }
}

/// Names of the available challenges.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, IntoStaticStr, PartialEq, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum ChallengeKind {
    /// See [`StringChallenge`].
    String,
    /// See [`SequenceChallenge`].
    Sequence,
    /// See [`BoardGameChallenge`].
    BoardGame,
    /// See [`BenefitsChallenge`].
    Benefits,
}

impl ChallengeKind {
    /// Every challenge, in presentation order.
    pub fn all() -> &'static [Self] {
        Self::VARIANTS
    }

    /// A one-paragraph human description of what the challenge computes.
    pub fn description(&self) -> &'static str {
        match self {
            Self::String => "Validates if the input is a valid string starting with B and ending with A. \
                The string must be longer than 1 character.",
            Self::Sequence => "Calculates the value of a number sequence based on a position (greater than 0).",
            Self::BoardGame => "Solves a board game by calculating the minimum number of turns, success probability, \
                and combinations without loops, given the board size and the list of jumps.",
            Self::Benefits => "Calculates the proportional value of vacation and thirteenth salary when resigning, \
                based on salary and the dates of admission and resignation.",
        }
    }

    /// An example input record, as JSON.
    pub fn example_input(&self) -> Value {
        match self {
            Self::String => json!({ "text": "hello" }),
            Self::Sequence => json!({ "position": 5 }),
            Self::BoardGame => json!({ "board_size": 3, "board": [1, 1, 1] }),
            Self::Benefits => json!({
                "salary": 3000.0,
                "hire_date": "2024-01-01",
                "resignation_date": "2025-08-21",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde::de::DeserializeOwned;
    use strum::VariantArray;

    use crate::challenge::{BenefitsInput, BoardGameInput, ChallengeKind, SequenceInput, StringInput};

    fn parses<T: DeserializeOwned>(kind: ChallengeKind) {
        serde_json::from_value::<T>(kind.example_input())
            .unwrap_or_else(|err| panic!("example for {kind} does not parse: {err}"));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ChallengeKind::VARIANTS {
            let name: &'static str = (*kind).into();
            assert_eq!(ChallengeKind::from_str(name).unwrap(), *kind);
        }
        assert_eq!(ChallengeKind::BoardGame.to_string(), "board_game");
    }

    #[test]
    fn examples_match_input_records() {
        parses::<StringInput>(ChallengeKind::String);
        parses::<SequenceInput>(ChallengeKind::Sequence);
        parses::<BoardGameInput>(ChallengeKind::BoardGame);
        parses::<BenefitsInput>(ChallengeKind::Benefits);
    }
}
