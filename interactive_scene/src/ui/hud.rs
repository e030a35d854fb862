//! HUD overlay: per-model hover state, last navigation, FPS counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::hover::{LifecycleState, NavigationIntent, NavigationKind};
use crate::navigation::NavigationRequested;
use crate::scene::{InteractiveModel, ModelRoot};

/// Navigation history shown in the HUD.
#[derive(Resource, Default)]
pub struct HudState {
    pub last_navigation: Option<NavigationIntent>,
    pub navigations: u64,
}

impl HudState {
    pub fn record(&mut self, intent: &NavigationIntent) {
        self.last_navigation = Some(intent.clone());
        self.navigations += 1;
    }
}

pub fn hud_plugin(app: &mut App) {
    super::ensure_egui(app);
    if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
        app.add_plugins(FrameTimeDiagnosticsPlugin);
    }
    app.init_resource::<HudState>()
        .add_systems(Update, (record_navigation, hud_overlay_system).chain());
}

fn record_navigation(mut events: EventReader<NavigationRequested>, mut hud: ResMut<HudState>) {
    for event in events.read() {
        hud.record(&event.intent);
    }
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    hud: Res<HudState>,
    diagnostics: Res<DiagnosticsStore>,
    models: Query<(&InteractiveModel, Option<&ModelRoot>)>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    let mut rows: Vec<_> = models.iter().collect();
    rows.sort_by_key(|(model, _)| model.object.id());

    egui::Window::new("Gallery")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            for (model, root) in rows {
                let name = root.map_or("model", |root| root.spec.src.as_str());
                let state = model.object.state();
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(state.as_str()).color(state_color(state)),
                    );
                    ui.label(short_name(name));
                });
            }
            ui.add_space(4.0);

            ui.separator();
            match &hud.last_navigation {
                Some(intent) => ui.label(format!(
                    "{} {}  ({})",
                    kind_arrow(intent.kind),
                    intent.destination,
                    hud.navigations
                )),
                None => ui.label("no navigation yet"),
            };
            ui.label(format!("FPS  {fps:.0}"));
        });
}

fn state_color(state: LifecycleState) -> egui::Color32 {
    match state {
        LifecycleState::Idle => egui::Color32::from_rgb(140, 150, 160),
        LifecycleState::Entering => egui::Color32::from_rgb(240, 200, 90),
        LifecycleState::Steady => egui::Color32::from_rgb(100, 220, 180),
        LifecycleState::Exiting => egui::Color32::from_rgb(230, 120, 100),
    }
}

fn kind_arrow(kind: NavigationKind) -> &'static str {
    match kind {
        NavigationKind::InternalRoute => "->",
        NavigationKind::ExternalOpen => "=>",
    }
}

/// File stem of an asset path.
fn short_name(src: &str) -> &str {
    let file = src.rsplit('/').next().unwrap_or(src);
    file.split_once('.').map_or(file, |(stem, _)| stem)
}
