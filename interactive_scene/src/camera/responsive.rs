//! Scene camera whose placement and field of view follow the window width.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Placement and lens for one width class. The camera always looks at the
/// origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraProfile {
    pub position: Vec3,
    pub fov_degrees: f32,
}

impl CameraProfile {
    pub const PHONE: Self = Self {
        position: Vec3::new(40.0, 60.0, 40.0),
        fov_degrees: 60.0,
    };
    pub const TABLET: Self = Self {
        position: Vec3::new(33.0, 55.0, 33.0),
        fov_degrees: 50.0,
    };
    pub const DESKTOP: Self = Self {
        position: Vec3::new(30.0, 45.0, 30.0),
        fov_degrees: 40.0,
    };

    /// Picks the profile for a logical window width.
    pub fn for_width(width: f32) -> Self {
        if width < 420.0 {
            Self::PHONE
        } else if width < 680.0 {
            Self::TABLET
        } else {
            Self::DESKTOP
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self) -> Projection {
        Projection::Perspective(PerspectiveProjection {
            fov: self.fov_degrees.to_radians(),
            ..default()
        })
    }
}

#[derive(Component)]
pub struct SceneCamera;

pub fn camera_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

pub fn responsive_camera_plugin(app: &mut App) {
    app.add_systems(Update, apply_camera_profile);
}

fn spawn_camera(mut commands: Commands, window: Query<&Window, With<PrimaryWindow>>) {
    let profile = window
        .get_single()
        .map_or(CameraProfile::DESKTOP, |w| CameraProfile::for_width(w.width()));
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        profile.projection(),
        profile.transform(),
    ));
}

/// Re-applies the profile when the primary window is resized.
fn apply_camera_profile(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<SceneCamera>>,
    mut current: Local<Option<CameraProfile>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let profile = CameraProfile::for_width(window.width());
    if *current == Some(profile) {
        return;
    }
    for (mut transform, mut projection) in &mut cameras {
        *transform = profile.transform();
        *projection = profile.projection();
    }
    debug!("camera profile for width {}: {:?}", window.width(), profile);
    *current = Some(profile);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_breakpoints() {
        assert_eq!(CameraProfile::for_width(375.0), CameraProfile::PHONE);
        assert_eq!(CameraProfile::for_width(420.0), CameraProfile::TABLET);
        assert_eq!(CameraProfile::for_width(679.9), CameraProfile::TABLET);
        assert_eq!(CameraProfile::for_width(680.0), CameraProfile::DESKTOP);
        assert_eq!(CameraProfile::for_width(1920.0), CameraProfile::DESKTOP);
    }

    #[test]
    fn profile_looks_at_origin() {
        let transform = CameraProfile::DESKTOP.transform();
        let toward_origin = (Vec3::ZERO - transform.translation).normalize();
        assert!(transform.forward().dot(toward_origin) > 0.999);
    }

    #[test]
    fn resize_switches_profile() {
        let mut app = App::new();
        app.add_systems(Update, apply_camera_profile);
        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        let camera = app
            .world_mut()
            .spawn((SceneCamera, Transform::default(), Projection::default()))
            .id();

        app.world_mut()
            .get_mut::<Window>(window)
            .unwrap()
            .resolution
            .set(400.0, 800.0);
        app.update();

        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, CameraProfile::PHONE.position);
        let Projection::Perspective(perspective) = app.world().get::<Projection>(camera).unwrap()
        else {
            panic!("expected a perspective projection");
        };
        assert!((perspective.fov - 60f32.to_radians()).abs() < 1e-6);
    }
}
