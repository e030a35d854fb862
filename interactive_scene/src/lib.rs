//! Interactive scene models: hover-driven animation lifecycle, multi-surface
//! pointer coalescing and click-to-navigate.
//!
//! Library root: the framework-independent hover core, Bevy host bindings,
//! catalogue data, config, and the SDK builder.

mod camera;
pub mod config;
pub mod data;
pub mod hover;
pub mod navigation;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::CameraProfile;
pub use data::{Catalogue, ModelSpec};
pub use scene::{
    drive_interactive_models, interactive_model_plugin, model_loading_plugin, observe_surfaces,
    surface_id, InteractiveModel, ModelCommand, ModelRoot, Presentation, SceneCatalogue,
    SurfacePointerEvent,
};
pub use ui::HudState;
