mod cursor;
mod hud;
mod labels;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub use cursor::cursor_plugin;
pub use hud::{hud_plugin, HudState};
pub use labels::label_plugin;

fn ensure_egui(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
}
