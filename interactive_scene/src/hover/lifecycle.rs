//! Hover lifecycle state machine: `idle → entering → steady → exiting → idle`.
//!
//! `transition` is a pure function of (state, event, hovered). `HoverLifecycle`
//! owns the current state plus its timer slots and applies the effects.

use std::time::Duration;

use tracing::debug;

use super::timers::{FiredTimer, TimerKind, TimerSlots};

/// Pointer must rest on the object this long before the entry animation starts.
pub const ENTRY_DELAY: Duration = Duration::from_millis(200);
/// Time spent in `Entering` before settling into `Steady`.
pub const STEADY_ARM: Duration = Duration::from_millis(1500);
/// Membership must stay empty this long before an exit begins.
pub const EXIT_GRACE: Duration = Duration::from_millis(1000);
/// Time spent in `Exiting` before returning to `Idle`.
pub const EXIT_DURATION: Duration = Duration::from_millis(1600);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    #[default]
    Idle,
    Entering,
    Steady,
    Exiting,
}

impl LifecycleState {
    pub fn is_active(self) -> bool {
        self != LifecycleState::Idle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Entering => "entering",
            LifecycleState::Steady => "steady",
            LifecycleState::Exiting => "exiting",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    HoverStart,
    HoverEnd,
    TimerFired(TimerKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEffect {
    /// Arm `kind` to fire `after` the triggering event.
    Schedule { kind: TimerKind, after: Duration },
    Cancel(TimerKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: LifecycleState,
    pub effects: Vec<TimerEffect>,
}

impl Transition {
    fn stay(state: LifecycleState) -> Self {
        Self {
            next: state,
            effects: Vec::new(),
        }
    }

    fn to(next: LifecycleState, effects: Vec<TimerEffect>) -> Self {
        Self { next, effects }
    }
}

fn schedule(kind: TimerKind, after: Duration) -> TimerEffect {
    TimerEffect::Schedule { kind, after }
}

/// Next state and timer effects for `event` arriving in `state`.
/// `hovered` is the coalesced membership at the moment of the event.
/// Events without a defined transition leave the state unchanged.
pub fn transition(state: LifecycleState, event: LifecycleEvent, hovered: bool) -> Transition {
    use LifecycleEvent::*;
    use LifecycleState::*;
    use TimerKind::*;

    match (state, event) {
        (Idle, HoverStart) => Transition::to(
            Idle,
            vec![
                TimerEffect::Cancel(ExitGrace),
                schedule(EntryDelay, ENTRY_DELAY),
            ],
        ),
        // Re-entry absorbs a pending exit.
        (Entering | Steady, HoverStart) => {
            Transition::to(state, vec![TimerEffect::Cancel(ExitGrace)])
        }
        (Idle, HoverEnd) => Transition::to(Idle, vec![TimerEffect::Cancel(EntryDelay)]),
        (Entering | Steady, HoverEnd) => Transition::to(
            state,
            vec![
                TimerEffect::Cancel(EntryDelay),
                schedule(ExitGrace, EXIT_GRACE),
            ],
        ),
        (Idle, TimerFired(EntryDelay)) if hovered => Transition::to(
            Entering,
            vec![
                TimerEffect::Cancel(ExitGrace),
                schedule(SteadyArm, STEADY_ARM),
            ],
        ),
        (Entering, TimerFired(SteadyArm)) => Transition::to(Steady, Vec::new()),
        (Entering | Steady, TimerFired(ExitGrace)) if !hovered => Transition::to(
            Exiting,
            vec![
                TimerEffect::Cancel(SteadyArm),
                schedule(ExitDuration, EXIT_DURATION),
            ],
        ),
        // Pointer came back while the exit animation ran: start over.
        (Exiting, TimerFired(ExitDuration)) if hovered => {
            Transition::to(Idle, vec![schedule(EntryDelay, ENTRY_DELAY)])
        }
        (Exiting, TimerFired(ExitDuration)) => Transition::to(Idle, Vec::new()),
        _ => Transition::stay(state),
    }
}

/// Current lifecycle state plus the timers that drive it.
#[derive(Debug, Default)]
pub struct HoverLifecycle {
    state: LifecycleState,
    timers: TimerSlots,
}

impl HoverLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn timers(&self) -> &TimerSlots {
        &self.timers
    }

    /// Applies `event` that happened at `at`. Returns the new state when it changed.
    pub fn apply(
        &mut self,
        event: LifecycleEvent,
        at: Duration,
        hovered: bool,
    ) -> Option<LifecycleState> {
        let Transition { next, effects } = transition(self.state, event, hovered);
        for effect in effects {
            match effect {
                TimerEffect::Schedule { kind, after } => self.timers.schedule(kind, at + after),
                TimerEffect::Cancel(kind) => {
                    self.timers.cancel(kind);
                }
            }
        }
        if next == self.state {
            if matches!(event, LifecycleEvent::TimerFired(_)) {
                debug!(state = self.state.as_str(), ?event, "timer fired without transition");
            }
            return None;
        }
        self.state = next;
        Some(next)
    }

    /// Removes the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<FiredTimer> {
        self.timers.pop_due(now)
    }

    /// Cancels every timer. The state is frozen from here on.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifecycleEvent::*;
    use LifecycleState::*;

    #[test]
    fn hover_start_in_idle_only_arms_entry_delay() {
        let t = transition(Idle, HoverStart, true);
        assert_eq!(t.next, Idle);
        assert!(t.effects.contains(&TimerEffect::Schedule {
            kind: TimerKind::EntryDelay,
            after: ENTRY_DELAY
        }));
    }

    #[test]
    fn entry_delay_requires_membership() {
        assert_eq!(
            transition(Idle, TimerFired(TimerKind::EntryDelay), true).next,
            Entering
        );
        assert_eq!(
            transition(Idle, TimerFired(TimerKind::EntryDelay), false).next,
            Idle
        );
    }

    #[test]
    fn exit_grace_is_absorbed_by_reentry() {
        assert_eq!(
            transition(Steady, TimerFired(TimerKind::ExitGrace), true).next,
            Steady
        );
        assert_eq!(
            transition(Steady, TimerFired(TimerKind::ExitGrace), false).next,
            Exiting
        );
    }

    #[test]
    fn hover_end_while_idle_is_a_no_op_transition() {
        let t = transition(Idle, HoverEnd, false);
        assert_eq!(t.next, Idle);
        assert_eq!(t.effects, vec![TimerEffect::Cancel(TimerKind::EntryDelay)]);
    }

    #[test]
    fn exiting_ignores_hover_edges() {
        assert_eq!(transition(Exiting, HoverStart, true), Transition::stay(Exiting));
        assert_eq!(transition(Exiting, HoverEnd, false), Transition::stay(Exiting));
    }

    #[test]
    fn exit_finishing_under_pointer_rearms_entry() {
        let t = transition(Exiting, TimerFired(TimerKind::ExitDuration), true);
        assert_eq!(t.next, Idle);
        assert_eq!(
            t.effects,
            vec![TimerEffect::Schedule {
                kind: TimerKind::EntryDelay,
                after: ENTRY_DELAY
            }]
        );
    }

    #[test]
    fn lifecycle_schedules_relative_to_event_time() {
        let mut lifecycle = HoverLifecycle::new();
        let t0 = Duration::from_millis(50);
        assert_eq!(lifecycle.apply(HoverStart, t0, true), None);
        assert_eq!(
            lifecycle.timers().deadline(TimerKind::EntryDelay),
            Some(t0 + ENTRY_DELAY)
        );

        let fired = lifecycle.pop_due(Duration::from_secs(10)).unwrap();
        assert_eq!(
            lifecycle.apply(TimerFired(fired.kind), fired.deadline, true),
            Some(Entering)
        );
        assert_eq!(
            lifecycle.timers().deadline(TimerKind::SteadyArm),
            Some(t0 + ENTRY_DELAY + STEADY_ARM)
        );
    }

    #[test]
    fn shutdown_cancels_pending_timers() {
        let mut lifecycle = HoverLifecycle::new();
        lifecycle.apply(HoverStart, Duration::ZERO, true);
        lifecycle.shutdown();
        assert_eq!(lifecycle.pop_due(Duration::from_secs(60)), None);
    }
}
