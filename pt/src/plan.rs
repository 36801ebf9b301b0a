//! Plan cursor: a goal, an ordered list of steps, and the step being worked on
//!
//! The cursor only ever moves forward, one step per [`Plan::advance`]. Advancing
//! completes the current step first and only then exposes the next one, so a
//! step never becomes current before its predecessor has recorded a result.
//!
//! Advancing from the last step returns [`Advance::EndOfPlan`] and leaves the
//! cursor where it is. Every such call completes the last step again; callers
//! that retry after the end see repeated completions.

use std::fmt;

use tracing::debug;

use crate::diagnostics::{DiagnosticSink, PlanEvent, SharedSink, default_sink};
use crate::error::{AdvanceError, OutOfRange};
use crate::step::{Goal, Step};

/// Outcome of [`Plan::advance`]
#[derive(Debug, PartialEq, Eq)]
pub enum Advance<'a, S> {
    /// The cursor moved; this is the new current step
    Next(&'a S),
    /// The completed step was the last one; the cursor did not move
    EndOfPlan,
}

impl<'a, S> Advance<'a, S> {
    /// Whether the plan has no more steps to run
    pub fn is_end_of_plan(&self) -> bool {
        matches!(self, Self::EndOfPlan)
    }

    /// The new current step, if the cursor moved
    pub fn step(&self) -> Option<&'a S> {
        match self {
            Self::Next(step) => Some(*step),
            Self::EndOfPlan => None,
        }
    }
}

/// A goal plus an ordered sequence of steps with a cursor over them
///
/// Not synchronized. To share across threads, wrap the whole plan in a lock so
/// that reads of the current/next step cannot interleave with an advance.
pub struct Plan<G, S> {
    goal: G,
    steps: Vec<S>,
    current_step_index: usize,
    sink: SharedSink,
}

impl<G: Goal, S: Step> Plan<G, S> {
    /// Create a plan positioned on its first step
    ///
    /// Diagnostics go to `tracing` until another sink is installed.
    pub fn new(goal: G, steps: Vec<S>) -> Self {
        debug!(steps = steps.len(), "Plan::new: called");
        Self {
            goal,
            steps,
            current_step_index: 0,
            sink: default_sink(),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(self, sink: impl DiagnosticSink + 'static) -> Self {
        self.with_shared_sink(std::sync::Arc::new(sink))
    }

    /// Replace the diagnostic sink with one that is shared elsewhere
    pub fn with_shared_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn goal(&self) -> &G {
        &self.goal
    }

    /// All steps, in plan order
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// 0-based index of the current step
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the cursor is on the final step (false for an empty plan)
    pub fn is_last(&self) -> bool {
        self.current_step_index + 1 >= self.steps.len() && !self.steps.is_empty()
    }

    /// The step being worked on right now
    ///
    /// Fails only when the plan has no steps.
    pub fn current_step(&self) -> Result<&S, OutOfRange> {
        self.sink.record(&PlanEvent::CurrentStepAccessed {
            index: self.current_step_index,
        });
        self.step_at(self.current_step_index)
    }

    /// The step after the current one, or `None` on the last step
    pub fn next_step(&self) -> Option<&S> {
        let next = self.current_step_index + 1;
        match self.steps.get(next) {
            Some(step) => {
                self.sink.record(&PlanEvent::NextStepAccessed { index: next });
                Some(step)
            }
            None => {
                self.sink.record(&PlanEvent::NoNextStep {
                    index: self.current_step_index,
                });
                None
            }
        }
    }

    /// Complete the current step with `result` and move to the next one
    ///
    /// The step's completion error is returned unchanged and leaves the cursor
    /// in place. On the last step this returns [`Advance::EndOfPlan`] after
    /// completing it.
    pub fn advance(&mut self, result: Option<&str>) -> Result<Advance<'_, S>, AdvanceError<S::Error>> {
        let index = self.current_step_index;
        let len = self.steps.len();
        let step = self.steps.get_mut(index).ok_or(OutOfRange { index, len })?;

        self.sink.record(&PlanEvent::Completing {
            index,
            result: result.map(str::to_string),
        });
        step.complete(result).map_err(AdvanceError::Step)?;

        if index + 1 >= len {
            self.sink.record(&PlanEvent::EndOfPlan { index });
            return Ok(Advance::EndOfPlan);
        }

        self.current_step_index = index + 1;
        self.sink.record(&PlanEvent::Advanced {
            index: self.current_step_index,
        });
        Ok(Advance::Next(&self.steps[self.current_step_index]))
    }

    fn step_at(&self, index: usize) -> Result<&S, OutOfRange> {
        self.steps.get(index).ok_or(OutOfRange {
            index,
            len: self.steps.len(),
        })
    }
}

impl<G: Goal, S: Step> fmt::Display for Plan<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sink.record(&PlanEvent::Described { len: self.steps.len() });

        writeln!(f, "Goal:\n{}\n", self.goal)?;
        match self.steps.get(self.current_step_index) {
            Some(step) => writeln!(f, "Current Step ({}): {}\n", self.current_step_index + 1, step)?,
            None => writeln!(f, "Current Step: none\n")?,
        }
        write!(f, "Steps:")?;
        for (idx, step) in self.steps.iter().enumerate() {
            write!(f, "\nStep {}: {}", idx + 1, step)?;
        }
        Ok(())
    }
}

impl<G: fmt::Debug, S: fmt::Debug> fmt::Debug for Plan<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("goal", &self.goal)
            .field("steps", &self.steps)
            .field("current_step_index", &self.current_step_index)
            .finish()
    }
}
