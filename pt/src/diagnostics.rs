//! Diagnostic side channel for plan activity
//!
//! Every accessor and mutator on a plan reports a [`PlanEvent`] to its sink.
//! Sinks are fire-and-forget: they cannot fail, and a plan behaves the same
//! whether events go to `tracing`, a test recorder, or nowhere.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// Observable plan activity
///
/// Indices are 0-based; `Display` renders them as 1-based step numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEvent {
    /// The current step was read
    CurrentStepAccessed { index: usize },
    /// The next step was read and exists
    NextStepAccessed { index: usize },
    /// The next step was read but the cursor is on the last step
    NoNextStep { index: usize },
    /// The current step is about to be completed
    Completing { index: usize, result: Option<String> },
    /// Advance was called on the last step
    EndOfPlan { index: usize },
    /// The cursor moved to a new step
    Advanced { index: usize },
    /// The plan was rendered for display
    Described { len: usize },
}

impl PlanEvent {
    /// Short machine-friendly name of the event
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CurrentStepAccessed { .. } => "current_step_accessed",
            Self::NextStepAccessed { .. } => "next_step_accessed",
            Self::NoNextStep { .. } => "no_next_step",
            Self::Completing { .. } => "completing",
            Self::EndOfPlan { .. } => "end_of_plan",
            Self::Advanced { .. } => "advanced",
            Self::Described { .. } => "described",
        }
    }
}

impl fmt::Display for PlanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentStepAccessed { index } => write!(f, "Accessing current step: Step {}", index + 1),
            Self::NextStepAccessed { index } => write!(f, "Accessing next step: Step {}", index + 1),
            Self::NoNextStep { index } => {
                write!(f, "Accessing next step: none after Step {}, end of plan", index + 1)
            }
            Self::Completing { index, result } => match result {
                Some(r) => write!(f, "Completing Step {} with result: {}", index + 1, r),
                None => write!(f, "Completing Step {} with no result", index + 1),
            },
            Self::EndOfPlan { index } => write!(f, "End of plan reached at Step {}", index + 1),
            Self::Advanced { index } => write!(f, "Proceeding to Step {}", index + 1),
            Self::Described { len } => write!(f, "Describing plan with {} steps", len),
        }
    }
}

/// Receiver for plan diagnostics
///
/// Implementations must not block and must not panic. Any closure taking a
/// `&PlanEvent` is a sink.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &PlanEvent);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&PlanEvent) + Send + Sync,
{
    fn record(&self, event: &PlanEvent) {
        self(event)
    }
}

/// Default sink: forwards events to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &PlanEvent) {
        debug!(event_type = event.event_type(), "{}", event);
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: &PlanEvent) {}
}

/// Shared handle to a sink, as held by a plan
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// The sink a plan gets when none is supplied
pub fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_event_display_is_one_based() {
        assert_eq!(
            PlanEvent::CurrentStepAccessed { index: 0 }.to_string(),
            "Accessing current step: Step 1"
        );
        assert_eq!(PlanEvent::Advanced { index: 2 }.to_string(), "Proceeding to Step 3");
        assert_eq!(
            PlanEvent::Completing {
                index: 1,
                result: Some("ok".into()),
            }
            .to_string(),
            "Completing Step 2 with result: ok"
        );
        assert_eq!(
            PlanEvent::Completing { index: 1, result: None }.to_string(),
            "Completing Step 2 with no result"
        );
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(PlanEvent::EndOfPlan { index: 0 }.event_type(), "end_of_plan");
        assert_eq!(PlanEvent::NoNextStep { index: 0 }.event_type(), "no_next_step");
        assert_eq!(PlanEvent::Described { len: 3 }.event_type(), "described");
    }

    #[test]
    fn test_closure_sink_receives_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            move |event: &PlanEvent| seen.lock().unwrap().push(event.clone())
        };

        recorder.record(&PlanEvent::Advanced { index: 1 });
        NoopSink.record(&PlanEvent::Advanced { index: 2 });
        TracingSink.record(&PlanEvent::Advanced { index: 3 });

        assert_eq!(*seen.lock().unwrap(), vec![PlanEvent::Advanced { index: 1 }]);
    }
}
