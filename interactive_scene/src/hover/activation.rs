//! Activation resolver: decides whether a pointer release navigates.

/// Destinations starting with one of these open outside the app.
pub const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Mouse,
    Pen,
    Touch,
}

/// Which button (or tap) produced a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressKind {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    InternalRoute,
    ExternalOpen,
}

impl NavigationKind {
    pub fn of(destination: &str) -> Self {
        let lower = destination.trim_start().to_ascii_lowercase();
        if EXTERNAL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
            NavigationKind::ExternalOpen
        } else {
            NavigationKind::InternalRoute
        }
    }
}

/// Resolved activation handed to the navigation collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationIntent {
    pub destination: String,
    pub kind: NavigationKind,
}

impl NavigationIntent {
    pub fn new(destination: impl Into<String>) -> Self {
        let destination = destination.into();
        let kind = NavigationKind::of(&destination);
        Self { destination, kind }
    }
}

/// A touch press starts hovering the touched surface.
pub fn press_begins_hover(device: Option<DeviceKind>) -> bool {
    device == Some(DeviceKind::Touch)
}

/// Resolves a pointer release into a navigation intent.
///
/// Touch releases always activate. Mouse and pen releases activate only for
/// the primary button while the object is still hovered.
pub fn resolve_activation(
    device: Option<DeviceKind>,
    press: PressKind,
    hovered: bool,
    destination: &str,
) -> Option<NavigationIntent> {
    let activates = match device? {
        DeviceKind::Touch => true,
        DeviceKind::Mouse | DeviceKind::Pen => press == PressKind::Primary && hovered,
    };
    activates.then(|| NavigationIntent::new(destination))
}
