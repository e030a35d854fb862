//! Minimal prelude for SDK consumers.

pub use crate::config::{asset_dir, catalogue, load_catalogue, ConfigError};
pub use crate::data::{Catalogue, ModelSpec};
pub use crate::hover::{
    CueTable, DeviceKind, InteractiveObject, LifecycleState, NavigationIntent, NavigationKind,
    ObjectCommand, PointerAction, PressKind, SurfaceId,
};
pub use crate::navigation::{
    navigation_channel, ChannelNavigator, LogNavigator, NavigationRequested, Navigator,
};
pub use crate::sdk::InteractiveSceneBuilder;
