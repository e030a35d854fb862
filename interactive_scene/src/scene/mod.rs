pub(crate) mod animation;
pub(crate) mod interaction;
pub(crate) mod materials;
pub(crate) mod models;
pub(crate) mod pointer;

pub use interaction::{
    apply_presenter_commands, drive_interactive_models, interactive_model_plugin, AnimationCues,
    InteractiveModel, ModelCommand, Presentation,
};
pub use materials::scene_materials_plugin;
pub use models::{model_loading_plugin, ModelRoot, SceneCatalogue};
pub use pointer::{observe_surfaces, surface_id, SurfacePointerEvent};
