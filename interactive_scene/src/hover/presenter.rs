//! Cursor/label presenter: derives ambient UI commands from hover state.

use super::lifecycle::LifecycleState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorStyle {
    Default,
    Pointer,
}

/// Instruction for the ambient UI sink. The host applies it as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresenterCommand {
    Cursor(CursorStyle),
    Label { visible: bool },
}

/// The pointer cursor follows raw membership so it feels immediate; the label
/// follows the debounced lifecycle.
pub fn present(state: LifecycleState, hovered: bool, has_label: bool) -> [PresenterCommand; 2] {
    let cursor = if hovered {
        CursorStyle::Pointer
    } else {
        CursorStyle::Default
    };
    [
        PresenterCommand::Cursor(cursor),
        PresenterCommand::Label {
            visible: has_label && state.is_active(),
        },
    ]
}
