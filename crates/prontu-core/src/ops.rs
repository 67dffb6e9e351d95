//! Phase tracking for the UI's asynchronous operations.
//!
//! Each independent operation (an attachment encode, the profile round trip,
//! a record submission) owns one `OpPhase` and advances it only through
//! [`transition_op_phase`]. `Started` is ignored while a run is pending, so
//! "one in flight" holds structurally instead of by convention.

/// Lifecycle of one asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpPhase {
    /// Nothing running, nothing to report.
    #[default]
    Idle,
    /// A run is in flight; starting another is refused.
    Pending,
    /// The last run finished successfully.
    Succeeded,
    /// The last run failed; the owner keeps the failure message.
    Failed,
}

impl OpPhase {
    /// Whether a run is currently in flight.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether a new run may start now.
    pub const fn can_start(self) -> bool {
        !self.is_pending()
    }
}

/// Events an operation can feed into its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpEvent {
    Started,
    Succeeded,
    Failed,
    Reset,
}

/// Advance an operation phase by one event.
///
/// Invalid combinations leave the phase unchanged; in particular `Started`
/// while `Pending` does not restart the operation.
pub const fn transition_op_phase(current: OpPhase, event: OpEvent) -> OpPhase {
    match (current, event) {
        (OpPhase::Idle | OpPhase::Succeeded | OpPhase::Failed, OpEvent::Started) => {
            OpPhase::Pending
        }
        (OpPhase::Pending, OpEvent::Succeeded) => OpPhase::Succeeded,
        (OpPhase::Pending, OpEvent::Failed) => OpPhase::Failed,
        (_, OpEvent::Reset) => OpPhase::Idle,
        (current, _) => current,
    }
}
