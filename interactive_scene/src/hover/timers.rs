//! One-shot timer slots keyed by timer kind, driven by an external clock.
//!
//! Deadlines are offsets from an arbitrary epoch (the host's elapsed time).
//! Nothing fires on its own: the owner polls `pop_due` with the current time.

use std::time::Duration;

/// The logical timers owned by one interactive object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    EntryDelay,
    SteadyArm,
    ExitGrace,
    ExitDuration,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::EntryDelay,
        TimerKind::SteadyArm,
        TimerKind::ExitGrace,
        TimerKind::ExitDuration,
    ];

    fn slot(self) -> usize {
        match self {
            TimerKind::EntryDelay => 0,
            TimerKind::SteadyArm => 1,
            TimerKind::ExitGrace => 2,
            TimerKind::ExitDuration => 3,
        }
    }
}

/// A timer that reached its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    pub kind: TimerKind,
    pub deadline: Duration,
}

/// At most one live deadline per `TimerKind`.
#[derive(Debug, Default)]
pub struct TimerSlots {
    slots: [Option<Duration>; 4],
}

impl TimerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `kind` at `deadline`, replacing any pending instance of it.
    pub fn schedule(&mut self, kind: TimerKind, deadline: Duration) {
        self.slots[kind.slot()] = Some(deadline);
    }

    /// Returns whether a pending instance was cancelled.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.slots[kind.slot()].take().is_some()
    }

    pub fn cancel_all(&mut self) {
        self.slots = [None; 4];
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Duration> {
        self.slots[kind.slot()]
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.slots.iter().flatten().min().copied()
    }

    /// Removes and returns the earliest timer due at `now`.
    /// Ties resolve in `TimerKind::ALL` order.
    pub fn pop_due(&mut self, now: Duration) -> Option<FiredTimer> {
        let kind = TimerKind::ALL
            .into_iter()
            .filter_map(|kind| self.deadline(kind).map(|at| (kind, at)))
            .filter(|&(_, at)| at <= now)
            .min_by_key(|&(_, at)| at)
            .map(|(kind, _)| kind)?;
        let deadline = self.slots[kind.slot()].take()?;
        Some(FiredTimer { kind, deadline })
    }
}
