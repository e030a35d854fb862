//! Floating model labels drawn with egui above each hovered model.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::scene::{apply_presenter_commands, InteractiveModel, Presentation};

/// Label anchor height in the model's local space.
const LABEL_OFFSET: f32 = 2.0;

pub fn label_plugin(app: &mut App) {
    super::ensure_egui(app);
    app.add_systems(Update, floating_labels_system.after(apply_presenter_commands));
}

pub fn label_anchor(transform: &GlobalTransform) -> Vec3 {
    transform.transform_point(Vec3::Y * LABEL_OFFSET)
}

fn floating_labels_system(
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    models: Query<(Entity, &InteractiveModel, &Presentation, &GlobalTransform)>,
) {
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();

    for (entity, model, presentation, transform) in &models {
        if !presentation.label_visible {
            continue;
        }
        let Some(text) = model.object.label() else {
            continue;
        };
        let Ok(screen) = camera.world_to_viewport(cam_transform, label_anchor(transform)) else {
            continue;
        };

        egui::Area::new(egui::Id::new(("model-label", entity)))
            .fixed_pos(egui::pos2(screen.x, screen.y))
            .pivot(egui::Align2::CENTER_BOTTOM)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::default()
                    .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                    .inner_margin(egui::Margin::same(6))
                    .corner_radius(egui::CornerRadius::same(4))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(text)
                                .size(14.0)
                                .color(egui::Color32::from_rgb(200, 220, 240)),
                        );
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_sits_above_the_scaled_root() {
        let transform = GlobalTransform::from(
            Transform::from_xyz(-12.0, 0.0, 2.0).with_scale(Vec3::splat(0.5)),
        );
        assert_eq!(label_anchor(&transform), Vec3::new(-12.0, 1.0, 2.0));
    }
}
