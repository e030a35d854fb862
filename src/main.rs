//! Gallery — interactive 3D models that animate on hover and navigate on click.

use bevy::app::AppExit;
use interactive_scene::prelude::{CueTable, InteractiveSceneBuilder};

fn main() -> AppExit {
    let _ = dotenvy::dotenv();

    InteractiveSceneBuilder::new()
        .window_title("Gallery")
        .cue_table(CueTable::hyphenated())
        .build()
        .run()
}
