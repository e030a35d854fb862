// Catalogue entry describing one interactive model.
// Bevy-specific conversion happens in scene::models.

use serde::{Deserialize, Serialize};

/// Material name replaced by the glass material unless overridden.
pub const DEFAULT_GLASS_MATERIAL: &str = "MyMixedMaterial";

/// A single interactive model and where clicking it leads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// glTF/GLB path relative to the asset root.
    pub src: String,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default)]
    pub position: [f32; 3],
    /// In-app route (`/blogposts`) or external URL (`https://…`).
    pub link: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "enabled")]
    pub cast_shadow: bool,
    #[serde(default = "enabled")]
    pub receive_shadow: bool,
    #[serde(default = "default_glass_material")]
    pub glass_material: Option<String>,
}

impl ModelSpec {
    pub fn new(src: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            scale: unit_scale(),
            position: [0.0; 3],
            link: link.into(),
            label: None,
            cast_shadow: true,
            receive_shadow: true,
            glass_material: default_glass_material(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = [scale; 3];
        self
    }

    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = [x, y, z];
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

fn unit_scale() -> [f32; 3] {
    [1.0; 3]
}

fn enabled() -> bool {
    true
}

fn default_glass_material() -> Option<String> {
    Some(DEFAULT_GLASS_MATERIAL.to_string())
}
