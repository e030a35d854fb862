//! Hover-animation state machine and multi-surface pointer coalescing.
//!
//! Framework-independent: nothing here knows about Bevy. The host feeds
//! hit-tested pointer events and the current time into an
//! [`InteractiveObject`] and applies the [`ObjectCommand`]s it returns.

pub mod activation;
pub mod coalescer;
pub mod director;
pub mod lifecycle;
pub mod object;
pub mod presenter;
pub mod timers;

pub use activation::{
    resolve_activation, DeviceKind, NavigationIntent, NavigationKind, PressKind,
};
pub use coalescer::{HoverEdge, PointerCoalescer, SurfaceId};
pub use director::{AnimationCue, AnimationDirector, ClipId, CuePlan, CueTable, CROSS_FADE_IN};
pub use lifecycle::{
    HoverLifecycle, LifecycleEvent, LifecycleState, ENTRY_DELAY, EXIT_DURATION, EXIT_GRACE,
    STEADY_ARM,
};
pub use object::{InteractiveObject, ObjectCommand, ObjectId, PointerAction};
pub use presenter::{CursorStyle, PresenterCommand};
pub use timers::{FiredTimer, TimerKind, TimerSlots};
