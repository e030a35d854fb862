//! SDK entry points and builder for composing the interactive scene app.

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use crate::camera::{camera_plugin, responsive_camera_plugin};
use crate::config;
use crate::data::Catalogue;
use crate::hover::CueTable;
use crate::navigation::{Navigator, NavigatorResource};
use crate::scene::{
    interactive_model_plugin, model_loading_plugin, scene_materials_plugin, AnimationCues,
    SceneCatalogue,
};
use crate::ui::{cursor_plugin, hud_plugin, label_plugin};

/// Builder for an app of interactive models that animate on hover and
/// navigate on click.
pub struct InteractiveSceneBuilder {
    catalogue: Option<Catalogue>,
    navigator: Option<NavigatorResource>,
    cues: CueTable,
    asset_dir: Option<String>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_hud: bool,
    enable_labels: bool,
    enable_responsive_camera: bool,
    enable_scene_materials: bool,
}

impl Default for InteractiveSceneBuilder {
    fn default() -> Self {
        Self {
            catalogue: None,
            navigator: None,
            cues: CueTable::default(),
            asset_dir: None,
            window_title: "Gallery".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.95, 0.95, 0.93),
            enable_hud: false,
            enable_labels: true,
            enable_responsive_camera: true,
            enable_scene_materials: true,
        }
    }
}

impl InteractiveSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit catalogue instead of `SCENE_CATALOGUE` / the built-in one.
    pub fn catalogue(mut self, catalogue: Catalogue) -> Self {
        self.catalogue = Some(catalogue);
        self
    }

    /// Where activation intents are delivered. Defaults to logging them.
    pub fn navigator(mut self, navigator: impl Navigator) -> Self {
        self.navigator = Some(NavigatorResource::new(navigator));
        self
    }

    /// Clip-name suffixes for the four animation cues. The built-in catalogue
    /// needs [`CueTable::hyphenated`].
    pub fn cue_table(mut self, cues: CueTable) -> Self {
        self.cues = cues;
        self
    }

    pub fn asset_dir(mut self, dir: impl Into<String>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn enable_hud(mut self) -> Self {
        self.enable_hud = true;
        self
    }

    pub fn disable_labels(mut self) -> Self {
        self.enable_labels = false;
        self
    }

    pub fn disable_responsive_camera(mut self) -> Self {
        self.enable_responsive_camera = false;
        self
    }

    pub fn disable_scene_materials(mut self) -> Self {
        self.enable_scene_materials = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let asset_dir = self.asset_dir.unwrap_or_else(config::asset_dir);

        let mut app = App::new();
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: self.window_title,
                        resolution: self.window_resolution.into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: asset_dir,
                    ..default()
                }),
        )
        .add_plugins(MeshPickingPlugin)
        .insert_resource(ClearColor(self.clear_color));

        // LogPlugin is installed by now, so the fallback warning is visible.
        let catalogue = match self.catalogue {
            Some(catalogue) => catalogue,
            None => config::catalogue().unwrap_or_else(|err| {
                warn!("{err}; using the built-in catalogue");
                Catalogue::builtin()
            }),
        };
        info!("scene catalogue: {} models", catalogue.len());

        if let Some(navigator) = self.navigator {
            app.insert_resource(navigator);
        }
        app.insert_resource(SceneCatalogue(catalogue))
            .insert_resource(AnimationCues(self.cues))
            .add_plugins((interactive_model_plugin, model_loading_plugin, camera_plugin))
            .add_plugins(cursor_plugin);

        if self.enable_responsive_camera {
            app.add_plugins(responsive_camera_plugin);
        }
        if self.enable_scene_materials {
            app.add_plugins(scene_materials_plugin);
        }
        if self.enable_labels {
            app.add_plugins(label_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }

        app
    }
}
