mod responsive;

pub use responsive::{camera_plugin, responsive_camera_plugin, CameraProfile};
