//! Collaborator capabilities a plan depends on
//!
//! The goal only needs to render itself. A step must render itself and accept
//! a completion result; what "complete" means (status, stored result, side
//! effects) belongs to the step, not to the plan.

use std::fmt::Display;

/// The desired outcome a plan pursues
///
/// Blanket-implemented for anything displayable.
pub trait Goal: Display {}

impl<T: Display + ?Sized> Goal for T {}

/// One unit of work in a plan
pub trait Step: Display {
    /// Error raised by [`Step::complete`], returned unchanged from `Plan::advance`
    type Error: std::error::Error + Send + Sync + 'static;

    /// Mark this step as completed, optionally recording a result
    fn complete(&mut self, result: Option<&str>) -> Result<(), Self::Error>;
}
