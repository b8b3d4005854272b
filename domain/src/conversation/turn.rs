//! Turn lifecycle state machine.
//!
//! One turn runs from user submission to a terminal phase:
//!
//! ```text
//! Idle → AwaitingTransport → Streaming → Finished
//!              │                 │
//!              └──→ Failed       └──(never fails on frame errors)
//! ```
//!
//! `Streaming` only ends through the sentinel, stream close, or
//! cancellation; individual malformed frames never fail a turn.

/// Phase of the current (or last) conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    /// Request sent, no response status seen yet.
    AwaitingTransport,
    /// Response accepted, deltas arriving.
    Streaming,
    /// Sentinel seen or stream closed.
    Finished,
    /// Transport failure (non-success status or read error before/instead
    /// of a usable stream).
    Failed,
}

impl TurnPhase {
    /// A new submission is only accepted when no turn is in flight.
    pub fn can_submit(&self) -> bool {
        matches!(
            self,
            TurnPhase::Idle | TurnPhase::Finished | TurnPhase::Failed
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Finished | TurnPhase::Failed)
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, TurnPhase::AwaitingTransport | TurnPhase::Streaming)
    }
}
