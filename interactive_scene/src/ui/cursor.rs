//! Pointer cursor over interactive models.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::scene::{apply_presenter_commands, Presentation};

pub fn cursor_plugin(app: &mut App) {
    app.add_systems(Update, apply_cursor_icon.after(apply_presenter_commands));
}

pub fn cursor_icon(pointer: bool) -> SystemCursorIcon {
    if pointer {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    }
}

/// The primary window shows a pointer while any model asks for one.
fn apply_cursor_icon(
    mut commands: Commands,
    presentations: Query<&Presentation>,
    window: Query<Entity, With<PrimaryWindow>>,
    mut applied: Local<Option<bool>>,
) {
    let pointer = presentations.iter().any(|p| p.pointer);
    if *applied == Some(pointer) {
        return;
    }
    let Ok(window) = window.get_single() else {
        return;
    };
    commands
        .entity(window)
        .insert(CursorIcon::from(cursor_icon(pointer)));
    *applied = Some(pointer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_affordance_picks_icon() {
        assert_eq!(cursor_icon(true), SystemCursorIcon::Pointer);
        assert_eq!(cursor_icon(false), SystemCursorIcon::Default);
    }

    #[test]
    fn cursor_follows_presentation() {
        let mut app = App::new();
        app.add_systems(Update, apply_cursor_icon);
        let window = app.world_mut().spawn(PrimaryWindow).id();
        let model = app.world_mut().spawn(Presentation::default()).id();

        app.update();
        assert_eq!(
            app.world().get::<CursorIcon>(window),
            Some(&CursorIcon::from(SystemCursorIcon::Default))
        );

        app.world_mut().get_mut::<Presentation>(model).unwrap().pointer = true;
        app.update();
        assert_eq!(
            app.world().get::<CursorIcon>(window),
            Some(&CursorIcon::from(SystemCursorIcon::Pointer))
        );
    }
}
