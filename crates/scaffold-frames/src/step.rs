//! Step identifiers.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Position of a frame in the sequence, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(NonZeroU32);

impl StepId {
    /// The step served when a request carries no identifier.
    pub const FIRST: StepId = StepId(NonZeroU32::MIN);

    /// Create a step id. Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Numeric value of the id.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id that follows this one.
    ///
    /// `self + 1`, whether or not a step with that id exists. Saturates at
    /// `u32::MAX`, which is past the end of any sequence.
    pub fn next(self) -> StepId {
        StepId(self.0.saturating_add(1))
    }

    /// Zero-based index into a sequence.
    pub(crate) fn index(self) -> usize {
        self.get() as usize - 1
    }
}

impl Default for StepId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StepId {
    type Err = InvalidStepId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStepId::Empty);
        }

        let value: u32 = trimmed
            .parse()
            .map_err(|_| InvalidStepId::NotANumber(trimmed.to_string()))?;

        StepId::new(value).ok_or(InvalidStepId::Zero)
    }
}

/// Errors from parsing a raw step identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStepId {
    #[error("step id is empty")]
    Empty,

    #[error("step id is not a number: {0:?}")]
    NotANumber(String),

    #[error("step ids start at 1")]
    Zero,
}

/// Parse the `id` query parameter.
///
/// An absent parameter means the first step.
pub fn parse_step_id(raw: Option<&str>) -> Result<StepId, InvalidStepId> {
    match raw {
        None => Ok(StepId::FIRST),
        Some(s) => s.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_id_is_first_step() {
        assert_eq!(parse_step_id(None), Ok(StepId::FIRST));
        assert_eq!(StepId::FIRST.get(), 1);
    }

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_step_id(Some("3")).unwrap().get(), 3);
        assert_eq!(parse_step_id(Some(" 6 ")).unwrap().get(), 6);
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(
            parse_step_id(Some("abc")),
            Err(InvalidStepId::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_step_id(Some("")), Err(InvalidStepId::Empty));
        assert_eq!(parse_step_id(Some("0")), Err(InvalidStepId::Zero));
        assert!(parse_step_id(Some("-2")).is_err());
        assert!(parse_step_id(Some("2.5")).is_err());
    }

    #[test]
    fn next_is_always_increment() {
        for n in 1..=10 {
            let id = StepId::new(n).unwrap();
            assert_eq!(id.next().get(), n + 1);
        }
    }

    #[test]
    fn next_saturates_at_max() {
        let max = StepId::new(u32::MAX).unwrap();
        assert_eq!(max.next(), max);
    }

    #[test]
    fn displays_as_number() {
        assert_eq!(StepId::new(4).unwrap().to_string(), "4");
    }
}
