use log::info;
use serde::{Deserialize, Serialize};

use crate::challenge::{Challenge, ChallengeError, ChallengeKind};
use crate::validate::{InvalidInput, Validate};

const FIRST_TERM: i64 = 11;
const COMMON_DIFFERENCE: i64 = 7;

/// Input to [`SequenceChallenge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SequenceInput {
    /// 1-indexed position of the requested term.
    pub position: i64,
}

/// Output of [`SequenceChallenge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SequenceOutput {
    /// The term at the requested position.
    pub result: i64,
}

impl Validate for SequenceInput {
    fn validate(&self) -> Result<(), InvalidInput> {
        if self.position <= 0 {
            return Err(InvalidInput::NonPositivePosition(self.position));
        }

        Ok(())
    }
}

/// Evaluates the arithmetic progression `11, 18, 25, 32, ...`, i.e. `a(n) = 11 + (n - 1) * 7`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceChallenge;

impl Challenge for SequenceChallenge {
    type Input = SequenceInput;
    type Output = SequenceOutput;

    fn kind(&self) -> ChallengeKind {
        ChallengeKind::Sequence
    }

    fn execute(&self, input: &SequenceInput) -> Result<SequenceOutput, ChallengeError> {
        let position = input.position;
        let result = position.checked_sub(1)
            .and_then(|steps| steps.checked_mul(COMMON_DIFFERENCE))
            .and_then(|offset| offset.checked_add(FIRST_TERM))
            .ok_or(ChallengeError::SequenceOverflow { position })?;
        info!("sequence term {position} is {result}");

        Ok(SequenceOutput { result })
    }
}

#[cfg(test)]
mod tests {
    use crate::challenge::{Challenge, ChallengeError, SequenceChallenge, SequenceInput};
    use crate::validate::InvalidInput;

    fn term(position: i64) -> Result<i64, ChallengeError> {
        SequenceChallenge.run(&SequenceInput { position }).map(|output| output.result)
    }

    #[test]
    fn first_terms() {
        assert_eq!(term(1), Ok(11));
        assert_eq!(term(2), Ok(18));
        assert_eq!(term(3), Ok(25));
        assert_eq!(term(4), Ok(32));
        assert_eq!(term(5), Ok(39));
        assert_eq!(term(6), Ok(46));
    }

    #[test]
    fn positions_start_at_one() {
        assert_eq!(term(0), Err(ChallengeError::Invalid(InvalidInput::NonPositivePosition(0))));
        assert_eq!(term(-1), Err(ChallengeError::Invalid(InvalidInput::NonPositivePosition(-1))));
    }

    #[test]
    fn huge_position_overflows() {
        assert_eq!(term(i64::MAX), Err(ChallengeError::SequenceOverflow { position: i64::MAX }));
    }
}
