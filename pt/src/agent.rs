//! Agent goal and step types
//!
//! Ready-made collaborators for [`Plan`](crate::Plan): a textual goal and a
//! step that records its status, result, and completion time.

use std::convert::Infallible;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::step::Step;

/// Desired outcome of an agent plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentGoal {
    pub description: String,
}

impl AgentGoal {
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        debug!(%description, "AgentGoal::new: called");
        Self { description }
    }
}

impl fmt::Display for AgentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Agent step status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Not completed yet
    #[default]
    Pending,
    /// Completed at least once
    Complete,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug!(?self, "StepStatus::fmt: called");
        match self {
            Self::Pending => {
                debug!("StepStatus::fmt: Pending branch");
                write!(f, "pending")
            }
            Self::Complete => {
                debug!("StepStatus::fmt: Complete branch");
                write!(f, "complete")
            }
        }
    }
}

/// One unit of agent work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStep {
    /// What the step does
    pub description: String,

    /// Current status
    #[serde(default)]
    pub status: StepStatus,

    /// Result recorded by the most recent completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// When the step was most recently completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// How many times the step has been completed
    #[serde(default)]
    pub completions: u32,
}

impl AgentStep {
    /// Create a pending step
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        debug!(%description, "AgentStep::new: called");
        Self {
            description,
            status: StepStatus::Pending,
            result: None,
            completed_at: None,
            completions: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == StepStatus::Complete
    }
}

impl Step for AgentStep {
    type Error = Infallible;

    /// Mark complete and store `result`, replacing any earlier one
    fn complete(&mut self, result: Option<&str>) -> Result<(), Self::Error> {
        debug!(description = %self.description, ?result, "AgentStep::complete: called");
        if self.is_complete() {
            debug!(completions = self.completions, "AgentStep::complete: already complete, completing again");
        }
        self.status = StepStatus::Complete;
        self.result = result.map(str::to_string);
        self.completed_at = Some(Utc::now());
        self.completions += 1;
        Ok(())
    }
}

impl fmt::Display for AgentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.description, self.status)?;
        if let Some(result) = &self.result {
            write!(f, " -> {}", result)?;
        }
        Ok(())
    }
}
