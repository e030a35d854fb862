//! Navigation collaborator: where activation intents end up.

use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};

use crate::hover::{NavigationIntent, NavigationKind, ObjectCommand};
use crate::scene::ModelCommand;

/// Performs in-app routing or external opens. Fire-and-forget.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, intent: &NavigationIntent);
}

#[derive(Resource)]
pub struct NavigatorResource(pub Box<dyn Navigator>);

impl NavigatorResource {
    pub fn new(navigator: impl Navigator) -> Self {
        Self(Box::new(navigator))
    }
}

/// Emitted for every dispatched intent so other systems can follow along.
#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequested {
    pub model: Entity,
    pub intent: NavigationIntent,
}

/// Default navigator: records the request in the log.
#[derive(Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, intent: &NavigationIntent) {
        match intent.kind {
            NavigationKind::InternalRoute => info!("route -> {}", intent.destination),
            NavigationKind::ExternalOpen => info!("open external -> {}", intent.destination),
        }
    }
}

/// Forwards intents to an embedding host over a channel.
pub struct ChannelNavigator(Sender<NavigationIntent>);

impl Navigator for ChannelNavigator {
    fn navigate(&self, intent: &NavigationIntent) {
        if self.0.send(intent.clone()).is_err() {
            warn!("navigation receiver dropped; {} not delivered", intent.destination);
        }
    }
}

/// Create a navigator whose intents arrive on the returned receiver.
pub fn navigation_channel() -> (ChannelNavigator, Receiver<NavigationIntent>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (ChannelNavigator(tx), rx)
}

pub fn dispatch_navigation(
    mut commands: EventReader<ModelCommand>,
    navigator: Res<NavigatorResource>,
    mut requested: EventWriter<NavigationRequested>,
) {
    for ModelCommand { model, command } in commands.read() {
        let ObjectCommand::Navigate(intent) = command else {
            continue;
        };
        navigator.0.navigate(intent);
        requested.send(NavigationRequested {
            model: *model,
            intent: intent.clone(),
        });
    }
}
