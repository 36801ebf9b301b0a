//! PlanTrack - linear plan-execution tracker
//!
//! A plan is a goal plus an ordered list of steps with a cursor on the step
//! being worked on. Advancing completes the current step and moves the cursor
//! forward; advancing from the last step reports the end of the plan instead.
//!
//! # Example
//!
//! ```
//! use plantrack::{AgentGoal, AgentStep, Plan};
//!
//! let mut plan = Plan::new(
//!     AgentGoal::new("ship it"),
//!     vec![AgentStep::new("build"), AgentStep::new("release")],
//! );
//! assert_eq!(plan.current_step().unwrap().description, "build");
//! assert!(!plan.advance(Some("ok")).unwrap().is_end_of_plan());
//! assert!(plan.advance(None).unwrap().is_end_of_plan());
//! ```
//!
//! # Modules
//!
//! - [`plan`] - The cursor itself
//! - [`step`] - Goal and step capabilities a plan relies on
//! - [`agent`] - Concrete agent goal and step types
//! - [`diagnostics`] - Pluggable diagnostic sink
//! - [`config`] - Configuration loading for the `pt` binary
//! - [`cli`] - Command-line interface

pub mod agent;
pub mod cli;
pub mod config;
pub mod diagnostics;
mod error;
pub mod plan;
pub mod step;

pub use agent::{AgentGoal, AgentStep, StepStatus};
pub use config::Config;
pub use diagnostics::{DiagnosticSink, NoopSink, PlanEvent, SharedSink, TracingSink};
pub use error::{AdvanceError, OutOfRange};
pub use plan::{Advance, Plan};
pub use step::{Goal, Step};
