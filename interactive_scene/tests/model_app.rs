use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use crossbeam_channel::Receiver;

use interactive_scene::hover::{
    CueTable, DeviceKind, InteractiveObject, LifecycleState, NavigationIntent, NavigationKind,
    ObjectId, PointerAction, PressKind,
};
use interactive_scene::navigation::{navigation_channel, NavigatorResource};
use interactive_scene::{
    interactive_model_plugin, surface_id, InteractiveModel, Presentation, SurfacePointerEvent,
};

const FRAME: Duration = Duration::from_millis(100);

struct Harness {
    app: App,
    model: Entity,
    surfaces: [Entity; 2],
    intents: Receiver<NavigationIntent>,
}

impl Harness {
    fn new(link: &str) -> Self {
        let (navigator, intents) = navigation_channel();
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
            .insert_resource(NavigatorResource::new(navigator))
            .add_plugins(interactive_model_plugin);

        let world = app.world_mut();
        let model = world.spawn_empty().id();
        let surfaces = [
            world.spawn_empty().set_parent(model).id(),
            world.spawn_empty().set_parent(model).id(),
        ];
        let object = InteractiveObject::new(
            ObjectId(0),
            surfaces.map(surface_id),
            &["Idle", "HoverEntry", "HoverIdle", "HoverExit"],
            &CueTable::default(),
            link,
            Some("Blog".to_string()),
        );
        world
            .entity_mut(model)
            .insert((InteractiveModel::new(object), Presentation::default()));

        // First update has a zero delta; afterwards each frame is 100 ms.
        app.update();
        Self {
            app,
            model,
            surfaces,
            intents,
        }
    }

    fn frames(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    fn pointer(&mut self, surface: usize, action: PointerAction, device: DeviceKind) {
        self.app.world_mut().send_event(SurfacePointerEvent {
            model: self.model,
            surface: self.surfaces[surface],
            action,
            device: Some(device),
        });
    }

    fn state(&self) -> LifecycleState {
        self.app
            .world()
            .get::<InteractiveModel>(self.model)
            .unwrap()
            .object
            .state()
    }

    fn presentation(&self) -> Presentation {
        *self.app.world().get::<Presentation>(self.model).unwrap()
    }
}

#[test]
fn hover_runs_the_full_lifecycle_on_frame_time() {
    let mut h = Harness::new("/blogposts");

    h.pointer(0, PointerAction::Enter, DeviceKind::Mouse);
    h.frames(1);
    assert_eq!(h.state(), LifecycleState::Idle);
    assert!(h.presentation().pointer);
    assert!(!h.presentation().label_visible);

    // The enter landed at 100 ms, so the entry delay ends at 300 ms.
    h.frames(2);
    assert_eq!(h.state(), LifecycleState::Entering);
    assert!(h.presentation().label_visible);

    h.frames(15);
    assert_eq!(h.state(), LifecycleState::Steady);

    h.pointer(0, PointerAction::Leave, DeviceKind::Mouse);
    h.frames(1);
    assert_eq!(h.state(), LifecycleState::Steady);
    assert!(!h.presentation().pointer);

    h.frames(10);
    assert_eq!(h.state(), LifecycleState::Exiting);

    h.frames(16);
    assert_eq!(h.state(), LifecycleState::Idle);
    assert_eq!(
        h.presentation(),
        Presentation {
            pointer: false,
            label_visible: false
        }
    );
}

#[test]
fn mouse_click_dispatches_to_the_navigator() {
    let mut h = Harness::new("https://clinkclank.netlify.app/");

    h.pointer(1, PointerAction::Enter, DeviceKind::Mouse);
    h.pointer(1, PointerAction::Down(PressKind::Primary), DeviceKind::Mouse);
    h.pointer(1, PointerAction::Up(PressKind::Primary), DeviceKind::Mouse);
    h.frames(1);

    let intent = h.intents.try_recv().unwrap();
    assert_eq!(intent.destination, "https://clinkclank.netlify.app/");
    assert_eq!(intent.kind, NavigationKind::ExternalOpen);
    assert!(h.intents.try_recv().is_err());
}

#[test]
fn touch_tap_navigates_and_clears_hover() {
    let mut h = Harness::new("/blogposts");

    h.pointer(0, PointerAction::Down(PressKind::Primary), DeviceKind::Touch);
    h.pointer(0, PointerAction::Up(PressKind::Primary), DeviceKind::Touch);
    h.frames(1);

    assert_eq!(h.intents.try_recv().unwrap().kind, NavigationKind::InternalRoute);
    assert!(!h.presentation().pointer);

    h.frames(30);
    assert_eq!(h.state(), LifecycleState::Idle);
}

#[test]
fn events_for_a_despawned_model_are_dropped() {
    let mut h = Harness::new("/blogposts");

    h.pointer(0, PointerAction::Enter, DeviceKind::Mouse);
    h.frames(1);
    h.app.world_mut().entity_mut(h.model).despawn_recursive();

    h.pointer(0, PointerAction::Up(PressKind::Primary), DeviceKind::Mouse);
    h.frames(30);

    assert!(h.intents.try_recv().is_err());
}
