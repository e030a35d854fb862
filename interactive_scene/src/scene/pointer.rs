//! Picking adapter: turns Bevy pointer events bubbling up from a model's
//! meshes into typed per-surface events for the hover core.

use bevy::picking::events::{Down, Out, Over, Pointer, Up};
use bevy::picking::pointer::{PointerButton, PointerId};
use bevy::prelude::*;

use crate::hover::{DeviceKind, PointerAction, PressKind, SurfaceId};

/// One hit-tested pointer event on a surface of an interactive model.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfacePointerEvent {
    /// Model root that owns the surface.
    pub model: Entity,
    /// Mesh entity the pointer actually hit.
    pub surface: Entity,
    pub action: PointerAction,
    pub device: Option<DeviceKind>,
}

pub fn surface_id(entity: Entity) -> SurfaceId {
    SurfaceId(entity.to_bits())
}

/// Bevy does not tell pens apart from mice; custom pointers are unknown.
pub fn device_kind(pointer: &PointerId) -> Option<DeviceKind> {
    match pointer {
        PointerId::Mouse => Some(DeviceKind::Mouse),
        PointerId::Touch(_) => Some(DeviceKind::Touch),
        PointerId::Custom(_) => None,
    }
}

pub fn press_kind(button: PointerButton) -> PressKind {
    match button {
        PointerButton::Primary => PressKind::Primary,
        PointerButton::Secondary => PressKind::Secondary,
        PointerButton::Middle => PressKind::Middle,
    }
}

/// Attaches the pointer observers to a model root.
pub fn observe_surfaces(entity: &mut EntityCommands) {
    entity
        .observe(forward_over)
        .observe(forward_out)
        .observe(forward_down)
        .observe(forward_up);
}

fn forward<E: std::fmt::Debug + Clone + Reflect>(
    trigger: &mut Trigger<Pointer<E>>,
    action: PointerAction,
    events: &mut EventWriter<SurfacePointerEvent>,
) {
    trigger.propagate(false);
    let pointer = trigger.event();
    events.send(SurfacePointerEvent {
        model: trigger.entity(),
        surface: pointer.target,
        action,
        device: device_kind(&pointer.pointer_id),
    });
}

fn forward_over(mut trigger: Trigger<Pointer<Over>>, mut events: EventWriter<SurfacePointerEvent>) {
    forward(&mut trigger, PointerAction::Enter, &mut events);
}

fn forward_out(mut trigger: Trigger<Pointer<Out>>, mut events: EventWriter<SurfacePointerEvent>) {
    forward(&mut trigger, PointerAction::Leave, &mut events);
}

fn forward_down(mut trigger: Trigger<Pointer<Down>>, mut events: EventWriter<SurfacePointerEvent>) {
    let action = PointerAction::Down(press_kind(trigger.event().event.button));
    forward(&mut trigger, action, &mut events);
}

fn forward_up(mut trigger: Trigger<Pointer<Up>>, mut events: EventWriter<SurfacePointerEvent>) {
    let action = PointerAction::Up(press_kind(trigger.event().event.button));
    forward(&mut trigger, action, &mut events);
}
