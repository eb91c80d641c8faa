use log::info;
use serde::{Deserialize, Serialize};

use crate::challenge::{Challenge, ChallengeError, ChallengeKind};
use crate::validate::{InvalidInput, Validate};

/// Input to [`StringChallenge`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StringInput {
    /// The text to check.
    pub text: String,
}

/// Output of [`StringChallenge`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StringOutput {
    /// Whether the text matched.
    pub is_valid: bool,
}

impl Validate for StringInput {
    fn validate(&self) -> Result<(), InvalidInput> {
        if self.text.is_empty() {
            return Err(InvalidInput::EmptyText);
        }

        Ok(())
    }
}

/// Checks whether a string starts with an uppercase `B` and ends with an uppercase `A`.
/// A single character can satisfy only one end, so it never matches.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringChallenge;

impl Challenge for StringChallenge {
    type Input = StringInput;
    type Output = StringOutput;

    fn kind(&self) -> ChallengeKind {
        ChallengeKind::String
    }

    fn execute(&self, input: &StringInput) -> Result<StringOutput, ChallengeError> {
        let text = input.text.as_str();
        let is_valid = text.starts_with('B') && text.ends_with('A');
        info!("string challenge on {text:?}: {is_valid}");

        Ok(StringOutput { is_valid })
    }
}

#[cfg(test)]
mod tests {
    use crate::challenge::{Challenge, ChallengeError, StringChallenge, StringInput};
    use crate::validate::InvalidInput;

    fn check(text: &str) -> bool {
        StringChallenge.run(&StringInput { text: text.to_owned() }).unwrap().is_valid
    }

    #[test]
    fn matches() {
        assert!(check("BA"));
        assert!(check("BCA"));
        assert!(check("BANANA"));
    }

    #[test]
    fn rejects() {
        for text in ["ABC", "BCD", "ba", "B", "A", "bA", "Ba"] {
            assert!(!check(text), "{text} should not match");
        }
    }

    #[test]
    fn empty_is_invalid() {
        assert_eq!(
            StringChallenge.run(&StringInput { text: String::new() }),
            Err(ChallengeError::Invalid(InvalidInput::EmptyText)),
        );
    }
}
