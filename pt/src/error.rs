//! Plan error types

use thiserror::Error;

/// A step was requested at an index the plan does not have
///
/// Only reachable on a plan constructed with no steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Step index {index} out of range for plan with {len} steps")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Errors from advancing a plan
#[derive(Debug, Error)]
pub enum AdvanceError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    /// The current step refused to complete
    #[error("Step completion failed: {0}")]
    Step(#[source] E),
}

impl<E> AdvanceError<E>
where
    E: std::error::Error + 'static,
{
    /// Unwrap the step's own error, if that is what failed
    pub fn into_step_error(self) -> Option<E> {
        match self {
            Self::Step(e) => Some(e),
            Self::OutOfRange(_) => None,
        }
    }
}
