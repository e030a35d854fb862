//! Per-frame driver for mounted interactive models.
//!
//! Pointer events and timer deadlines go into each model's
//! `InteractiveObject`; the commands it returns are broadcast as
//! `ModelCommand` events and applied by the animation, presenter and
//! navigation systems in the same frame.

use bevy::ecs::component::ComponentId;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;

use crate::hover::{CueTable, CursorStyle, InteractiveObject, ObjectCommand, PresenterCommand};
use crate::navigation::{
    dispatch_navigation, LogNavigator, NavigationRequested, NavigatorResource,
};
use crate::scene::animation::{advance_cue_fades, apply_cue_plans, refresh_finished_poses};
use crate::scene::pointer::{surface_id, SurfacePointerEvent};

/// A mounted model root and the hover core that drives it.
#[derive(Component)]
#[component(on_remove = teardown_on_remove)]
pub struct InteractiveModel {
    pub object: InteractiveObject,
    /// Entity holding the scene's `AnimationPlayer`, if the model is animated.
    pub player: Option<Entity>,
    /// Graph node for each `ClipId`, in clip order.
    pub clip_nodes: Vec<AnimationNodeIndex>,
    /// Entities whose morph weights depend on the animated pose.
    pub morph_targets: Vec<Entity>,
}

impl InteractiveModel {
    pub fn new(object: InteractiveObject) -> Self {
        Self {
            object,
            player: None,
            clip_nodes: Vec::new(),
            morph_targets: Vec::new(),
        }
    }
}

fn teardown_on_remove(mut world: DeferredWorld, entity: Entity, _: ComponentId) {
    if let Some(mut model) = world.get_mut::<InteractiveModel>(entity) {
        model.object.teardown();
    }
}

/// Latest presenter output for a model, read by the UI sink.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    pub pointer: bool,
    pub label_visible: bool,
}

/// A command produced by the hover core of `model`.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct ModelCommand {
    pub model: Entity,
    pub command: ObjectCommand,
}

/// Clip-name suffixes used when mounting models.
#[derive(Resource, Clone, Debug, Default)]
pub struct AnimationCues(pub CueTable);

pub fn interactive_model_plugin(app: &mut App) {
    if !app.world().contains_resource::<NavigatorResource>() {
        app.insert_resource(NavigatorResource::new(LogNavigator));
    }
    app.init_resource::<AnimationCues>()
        .add_event::<SurfacePointerEvent>()
        .add_event::<ModelCommand>()
        .add_event::<NavigationRequested>()
        .add_systems(
            Update,
            (
                drive_interactive_models,
                (apply_cue_plans, apply_presenter_commands, dispatch_navigation),
                advance_cue_fades,
                refresh_finished_poses,
            )
                .chain(),
        );
}

/// Fires due timers, then feeds this frame's pointer events in delivery order.
pub fn drive_interactive_models(
    time: Res<Time>,
    mut pointer_events: EventReader<SurfacePointerEvent>,
    mut models: Query<(Entity, &mut InteractiveModel)>,
    mut out: EventWriter<ModelCommand>,
) {
    let now = time.elapsed();

    for (entity, mut model) in &mut models {
        if model.object.next_deadline().is_some_and(|at| at <= now) {
            let commands = model.object.advance(now);
            send_all(&mut out, entity, commands);
        }
    }

    for event in pointer_events.read() {
        let Ok((entity, mut model)) = models.get_mut(event.model) else {
            debug!("pointer event for unmounted model {:?}", event.model);
            continue;
        };
        let commands = model
            .object
            .handle(event.action, surface_id(event.surface), event.device, now);
        send_all(&mut out, entity, commands);
    }
}

fn send_all(out: &mut EventWriter<ModelCommand>, model: Entity, commands: Vec<ObjectCommand>) {
    out.send_batch(
        commands
            .into_iter()
            .map(|command| ModelCommand { model, command }),
    );
}

pub fn apply_presenter_commands(
    mut commands: EventReader<ModelCommand>,
    mut presentations: Query<&mut Presentation>,
) {
    for ModelCommand { model, command } in commands.read() {
        let ObjectCommand::Present(present) = command else {
            continue;
        };
        let Ok(mut presentation) = presentations.get_mut(*model) else {
            continue;
        };
        match *present {
            PresenterCommand::Cursor(style) => {
                presentation.pointer = style == CursorStyle::Pointer;
            }
            PresenterCommand::Label { visible } => presentation.label_visible = visible,
        }
    }
}
