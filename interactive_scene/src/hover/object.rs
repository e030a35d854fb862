//! One interactive scene object: surfaces, hover membership, lifecycle, cues
//! and activation behind a command-returning API.
//!
//! Every entry point takes the current time and first fires timers that came
//! due before it, so the timeline stays ordered no matter how often the host
//! polls. Results are returned as `ObjectCommand`s for the host to apply.

use std::time::Duration;

use tracing::debug;

use super::activation::{
    press_begins_hover, resolve_activation, DeviceKind, NavigationIntent, PressKind,
};
use super::coalescer::{HoverEdge, PointerCoalescer, SurfaceId};
use super::director::{AnimationCue, AnimationDirector, ClipId, CuePlan, CueTable};
use super::lifecycle::{HoverLifecycle, LifecycleEvent, LifecycleState};
use super::presenter::{present, PresenterCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Raw per-surface pointer input, already hit-tested by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Enter,
    Leave,
    Down(PressKind),
    Up(PressKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectCommand {
    Animate(CuePlan),
    Present(PresenterCommand),
    Navigate(NavigationIntent),
}

#[derive(Debug)]
pub struct InteractiveObject {
    id: ObjectId,
    surfaces: Vec<SurfaceId>,
    destination: String,
    label: Option<String>,
    coalescer: PointerCoalescer,
    lifecycle: HoverLifecycle,
    director: AnimationDirector,
    alive: bool,
}

impl InteractiveObject {
    /// Builds an object from its resolved asset: the surfaces it owns and the
    /// names of its animation clips (`ClipId(i)` is `clip_names[i]`).
    pub fn new<S: AsRef<str>>(
        id: ObjectId,
        surfaces: impl IntoIterator<Item = SurfaceId>,
        clip_names: &[S],
        cues: &CueTable,
        destination: impl Into<String>,
        label: Option<String>,
    ) -> Self {
        let mut surfaces: Vec<SurfaceId> = surfaces.into_iter().collect();
        surfaces.sort_unstable();
        surfaces.dedup();
        Self {
            id,
            surfaces,
            destination: destination.into(),
            label: label.filter(|text| !text.trim().is_empty()),
            coalescer: PointerCoalescer::new(),
            lifecycle: HoverLifecycle::new(),
            director: AnimationDirector::new(clip_names, cues),
            alive: true,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn is_hovered(&self) -> bool {
        self.coalescer.is_hovered()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn surfaces(&self) -> &[SurfaceId] {
        &self.surfaces
    }

    pub fn owns(&self, surface: SurfaceId) -> bool {
        self.surfaces.binary_search(&surface).is_ok()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.lifecycle.timers().next_deadline()
    }

    /// Initial commands after the scene mounts the object: the idle cue and a
    /// resting presentation.
    pub fn mount(&mut self) -> Vec<ObjectCommand> {
        let mut out = Vec::new();
        if self.live("mount") {
            out.push(ObjectCommand::Animate(self.director.direct(AnimationCue::Idle)));
            self.present_into(&mut out);
        }
        out
    }

    pub fn handle(
        &mut self,
        action: PointerAction,
        surface: SurfaceId,
        device: Option<DeviceKind>,
        now: Duration,
    ) -> Vec<ObjectCommand> {
        match action {
            PointerAction::Enter => self.on_surface_enter(surface, now),
            PointerAction::Leave => self.on_surface_leave(surface, now),
            PointerAction::Down(press) => self.on_pointer_down(device, press, surface, now),
            PointerAction::Up(press) => self.on_pointer_up(device, press, surface, now),
        }
    }

    pub fn on_surface_enter(&mut self, surface: SurfaceId, now: Duration) -> Vec<ObjectCommand> {
        let mut out = Vec::new();
        if !self.accepts(surface) {
            return out;
        }
        self.fire_due(now, &mut out);
        let edge = self.coalescer.on_surface_enter(surface);
        self.apply_edge(edge, now, &mut out);
        out
    }

    pub fn on_surface_leave(&mut self, surface: SurfaceId, now: Duration) -> Vec<ObjectCommand> {
        let mut out = Vec::new();
        if !self.accepts(surface) {
            return out;
        }
        self.fire_due(now, &mut out);
        let edge = self.coalescer.on_surface_leave(surface);
        self.apply_edge(edge, now, &mut out);
        out
    }

    /// Touch presses enter the touched surface so touch shares the hover path.
    pub fn on_pointer_down(
        &mut self,
        device: Option<DeviceKind>,
        _press: PressKind,
        surface: SurfaceId,
        now: Duration,
    ) -> Vec<ObjectCommand> {
        let mut out = Vec::new();
        if !self.accepts(surface) {
            return out;
        }
        self.fire_due(now, &mut out);
        if press_begins_hover(device) {
            let edge = self.coalescer.on_surface_enter(surface);
            self.apply_edge(edge, now, &mut out);
        }
        out
    }

    /// Resolves activation, then ends a touch hover. A lifted touch hovers
    /// nothing, so the whole membership is dropped.
    pub fn on_pointer_up(
        &mut self,
        device: Option<DeviceKind>,
        press: PressKind,
        surface: SurfaceId,
        now: Duration,
    ) -> Vec<ObjectCommand> {
        let mut out = Vec::new();
        if !self.accepts(surface) {
            return out;
        }
        self.fire_due(now, &mut out);
        if let Some(intent) =
            resolve_activation(device, press, self.coalescer.is_hovered(), &self.destination)
        {
            debug!(object = ?self.id, destination = %intent.destination, "activated");
            out.push(ObjectCommand::Navigate(intent));
        }
        if press_begins_hover(device) {
            let edge = self.coalescer.clear();
            self.apply_edge(edge, now, &mut out);
        }
        out
    }

    /// Fires every timer due at `now`.
    pub fn advance(&mut self, now: Duration) -> Vec<ObjectCommand> {
        let mut out = Vec::new();
        if self.alive {
            self.fire_due(now, &mut out);
        }
        out
    }

    /// See [`AnimationDirector::clip_finished`].
    pub fn clip_finished(&mut self, clip: ClipId) -> bool {
        self.alive && self.director.clip_finished(clip)
    }

    /// Cancels all timers and silences the object for good.
    pub fn teardown(&mut self) {
        if !self.alive {
            return;
        }
        self.lifecycle.shutdown();
        self.alive = false;
        debug!(object = ?self.id, "torn down");
    }

    fn live(&self, what: &'static str) -> bool {
        if !self.alive {
            debug!(object = ?self.id, what, "dropped after teardown");
        }
        self.alive
    }

    fn accepts(&self, surface: SurfaceId) -> bool {
        if !self.live("pointer event") {
            return false;
        }
        if !self.owns(surface) {
            debug!(object = ?self.id, ?surface, "pointer event for unknown surface");
            return false;
        }
        true
    }

    fn fire_due(&mut self, now: Duration, out: &mut Vec<ObjectCommand>) {
        let hovered = self.coalescer.is_hovered();
        while let Some(fired) = self.lifecycle.pop_due(now) {
            let event = LifecycleEvent::TimerFired(fired.kind);
            if let Some(state) = self.lifecycle.apply(event, fired.deadline, hovered) {
                self.state_changed(state, out);
            }
        }
    }

    fn apply_edge(
        &mut self,
        edge: Option<HoverEdge>,
        now: Duration,
        out: &mut Vec<ObjectCommand>,
    ) {
        let Some(edge) = edge else {
            return;
        };
        let event = match edge {
            HoverEdge::Start => LifecycleEvent::HoverStart,
            HoverEdge::End => LifecycleEvent::HoverEnd,
        };
        match self.lifecycle.apply(event, now, self.coalescer.is_hovered()) {
            Some(state) => self.state_changed(state, out),
            None => self.present_into(out),
        }
    }

    fn state_changed(&mut self, state: LifecycleState, out: &mut Vec<ObjectCommand>) {
        debug!(object = ?self.id, state = state.as_str(), "hover lifecycle");
        let plan = self.director.direct(AnimationCue::for_state(state));
        out.push(ObjectCommand::Animate(plan));
        self.present_into(out);
    }

    fn present_into(&self, out: &mut Vec<ObjectCommand>) {
        let commands = present(
            self.lifecycle.state(),
            self.coalescer.is_hovered(),
            self.label.is_some(),
        );
        out.extend(commands.map(ObjectCommand::Present));
    }
}
