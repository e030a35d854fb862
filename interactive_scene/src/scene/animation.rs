//! Applies cue plans to a model's `AnimationPlayer`: hard stop, short fade-in
//! of the new clips, and morph-weight refresh once one-shot clips finish.

use std::time::Duration;

use bevy::animation::ActiveAnimation;
use bevy::prelude::*;
use bevy::render::mesh::morph::MorphWeights;

use crate::hover::{ClipId, ObjectCommand};
use crate::scene::interaction::{InteractiveModel, ModelCommand};

/// Ramps freshly started clips from weight 0 to 1.
#[derive(Component, Clone, Debug)]
pub struct CueFade {
    nodes: Vec<AnimationNodeIndex>,
    elapsed: Duration,
    duration: Duration,
}

impl CueFade {
    pub fn new(nodes: Vec<AnimationNodeIndex>, duration: Duration) -> Self {
        Self {
            nodes,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn tick(&mut self, delta: Duration) -> f32 {
        self.elapsed += delta;
        self.weight()
    }

    pub fn weight(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

pub fn apply_cue_plans(
    mut commands: Commands,
    mut events: EventReader<ModelCommand>,
    models: Query<&InteractiveModel>,
    mut players: Query<&mut AnimationPlayer>,
) {
    for ModelCommand { model, command } in events.read() {
        let ObjectCommand::Animate(plan) = command else {
            continue;
        };
        let Ok(interactive) = models.get(*model) else {
            continue;
        };
        let Some(player_entity) = interactive.player else {
            continue;
        };
        let Ok(mut player) = players.get_mut(player_entity) else {
            continue;
        };

        // With nothing to start the stopped player leaves the last pose in place.
        player.stop_all();

        let nodes: Vec<AnimationNodeIndex> = plan
            .clips
            .iter()
            .filter_map(|clip| interactive.clip_nodes.get(clip.0).copied())
            .collect();
        for &node in &nodes {
            let active = player.start(node);
            active.set_weight(0.0);
            if plan.looping {
                active.repeat();
            }
        }

        if nodes.is_empty() {
            commands.entity(player_entity).remove::<CueFade>();
        } else {
            commands
                .entity(player_entity)
                .insert(CueFade::new(nodes, plan.fade_in));
        }
    }
}

pub fn advance_cue_fades(
    mut commands: Commands,
    time: Res<Time>,
    mut fades: Query<(Entity, &mut CueFade, &mut AnimationPlayer)>,
) {
    for (entity, mut fade, mut player) in &mut fades {
        let weight = fade.tick(time.delta());
        for &node in &fade.nodes {
            if let Some(active) = player.animation_mut(node) {
                active.set_weight(weight);
            }
        }
        if weight >= 1.0 {
            commands.entity(entity).remove::<CueFade>();
        }
    }
}

/// Marks morph weights changed after a one-shot clip ends so consumers see
/// the final frame.
pub fn refresh_finished_poses(
    mut models: Query<&mut InteractiveModel>,
    players: Query<&AnimationPlayer>,
    mut weights: Query<&mut MorphWeights>,
) {
    for mut model in &mut models {
        let Some(player) = model.player.and_then(|entity| players.get(entity).ok()) else {
            continue;
        };
        let finished: Vec<ClipId> = model
            .clip_nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| player.animation(**node).is_some_and(ActiveAnimation::is_finished))
            .map(|(i, _)| ClipId(i))
            .collect();
        if finished.is_empty() {
            continue;
        }

        let mut refresh = false;
        for clip in finished {
            refresh |= model.object.clip_finished(clip);
        }
        if !refresh {
            continue;
        }
        for &target in &model.morph_targets {
            if let Ok(mut morph) = weights.get_mut(target) {
                morph.set_changed();
            }
        }
    }
}
