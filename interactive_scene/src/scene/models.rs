//! Spawning catalogue models, resolving their glTF assets, and mounting the
//! hover core once the scene instance exists.

use bevy::asset::LoadState;
use bevy::ecs::system::SystemParam;
use bevy::gltf::Gltf;
use bevy::picking::PickingBehavior;
use bevy::prelude::*;
use bevy::render::mesh::morph::MorphWeights;
use bevy::scene::SceneInstanceReady;

use crate::data::{Catalogue, ModelSpec};
use crate::hover::{InteractiveObject, ObjectId};
use crate::scene::interaction::{AnimationCues, InteractiveModel, ModelCommand, Presentation};
use crate::scene::pointer::{observe_surfaces, surface_id};

const LIGHT_POSITION: Vec3 = Vec3::new(20.0, 40.0, -30.0);
const GROUND_SIZE: f32 = 200.0;

/// Catalogue entry placed in the scene.
#[derive(Component, Clone, Debug)]
pub struct ModelRoot {
    pub id: ObjectId,
    pub spec: ModelSpec,
}

/// glTF still loading for this root.
#[derive(Component)]
pub struct PendingModel(pub Handle<Gltf>);

/// Named clips of the loaded glTF, sorted by name; `nodes[i]` plays `names[i]`.
#[derive(Component, Clone, Debug)]
pub struct ResolvedClips {
    pub names: Vec<String>,
    pub nodes: Vec<AnimationNodeIndex>,
    pub graph: Handle<AnimationGraph>,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct SceneCatalogue(pub Catalogue);

pub fn model_loading_plugin(app: &mut App) {
    app.init_resource::<SceneCatalogue>()
        .add_systems(Startup, (setup_scene, spawn_catalogue_models))
        .add_systems(Update, resolve_pending_models)
        .add_observer(mount_ready_models);
}

/// Static lighting and the shadow-receiving ground.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.0, 0.0, 0.6),
            alpha_mode: AlphaMode::Multiply,
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.1, 0.0),
        PickingBehavior::IGNORE,
    ));
}

pub fn spawn_catalogue_models(
    mut commands: Commands,
    catalogue: Res<SceneCatalogue>,
    asset_server: Res<AssetServer>,
) {
    for (index, spec) in catalogue.0.models.iter().enumerate() {
        let id = ObjectId(index as u32);
        commands.spawn((
            ModelRoot {
                id,
                spec: spec.clone(),
            },
            model_transform(spec),
            Visibility::default(),
            PendingModel(asset_server.load(spec.src.clone())),
        ));
        info!("spawned model {} -> {}", spec.src, spec.link);
    }
}

pub fn model_transform(spec: &ModelSpec) -> Transform {
    Transform::from_translation(Vec3::from_array(spec.position))
        .with_scale(Vec3::from_array(spec.scale))
}

/// Instantiates the default scene of each loaded glTF and builds its
/// animation graph. Failed loads leave the root empty.
pub fn resolve_pending_models(
    mut commands: Commands,
    pending: Query<(Entity, &ModelRoot, &PendingModel)>,
    gltfs: Res<Assets<Gltf>>,
    asset_server: Res<AssetServer>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    for (entity, root, PendingModel(handle)) in &pending {
        let Some(gltf) = gltfs.get(handle) else {
            if let LoadState::Failed(err) = asset_server.load_state(handle) {
                warn!("failed to load {}: {err}", root.spec.src);
                commands.entity(entity).remove::<PendingModel>();
            }
            continue;
        };

        let mut model = commands.entity(entity);
        model.remove::<PendingModel>();
        let Some(scene) = gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned())
        else {
            warn!("{} has no scene", root.spec.src);
            continue;
        };

        let mut named: Vec<(String, Handle<AnimationClip>)> = gltf
            .named_animations
            .iter()
            .map(|(name, clip)| (name.to_string(), clip.clone()))
            .collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));
        let (names, clips): (Vec<String>, Vec<Handle<AnimationClip>>) = named.into_iter().unzip();
        let (graph, nodes) = AnimationGraph::from_clips(clips);

        model.insert((
            SceneRoot(scene),
            ResolvedClips {
                names,
                nodes,
                graph: graphs.add(graph),
            },
        ));
    }
}

/// Queries used to walk a ready scene instance once.
#[derive(SystemParam)]
pub struct SceneParts<'w, 's> {
    children: Query<'w, 's, &'static Children>,
    meshes: Query<'w, 's, (), With<Mesh3d>>,
    morphs: Query<'w, 's, (), With<MorphWeights>>,
    players: Query<'w, 's, (), With<AnimationPlayer>>,
}

/// What a model's descendants contribute to its interactive object.
#[derive(Debug, Default)]
pub struct ModelParts {
    pub surfaces: Vec<Entity>,
    pub morph_targets: Vec<Entity>,
    pub player: Option<Entity>,
}

impl SceneParts<'_, '_> {
    pub fn collect(&self, root: Entity) -> ModelParts {
        let mut parts = ModelParts::default();
        for entity in self.children.iter_descendants(root) {
            if self.meshes.contains(entity) {
                parts.surfaces.push(entity);
            }
            if self.morphs.contains(entity) {
                parts.morph_targets.push(entity);
            }
            if parts.player.is_none() && self.players.contains(entity) {
                parts.player = Some(entity);
            }
        }
        parts
    }
}

/// Captures the model's surfaces, morph targets and animation player, then
/// mounts the hover core and plays the idle cue.
pub fn mount_ready_models(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    roots: Query<(&ModelRoot, Option<&ResolvedClips>)>,
    scene: SceneParts,
    cues: Res<AnimationCues>,
    mut out: EventWriter<ModelCommand>,
) {
    let root = trigger.entity();
    let Ok((model, clips)) = roots.get(root) else {
        return;
    };
    let parts = scene.collect(root);

    let names: &[String] = clips.map_or(&[], |clips| clips.names.as_slice());
    let object = InteractiveObject::new(
        model.id,
        parts.surfaces.iter().copied().map(surface_id),
        names,
        &cues.0,
        model.spec.link.clone(),
        model.spec.label.clone(),
    );
    info!(
        "mounted {} with {} surfaces, {} clips",
        model.spec.src,
        object.surfaces().len(),
        names.len()
    );

    let mut interactive = InteractiveModel::new(object);
    interactive.morph_targets = parts.morph_targets;
    if let (Some(player), Some(clips)) = (parts.player, clips) {
        commands
            .entity(player)
            .insert(AnimationGraphHandle(clips.graph.clone()));
        interactive.player = Some(player);
        interactive.clip_nodes = clips.nodes.clone();
    }

    let initial = interactive.object.mount();
    out.send_batch(
        initial
            .into_iter()
            .map(|command| ModelCommand { model: root, command }),
    );

    let mut entity = commands.entity(root);
    entity.insert((interactive, Presentation::default()));
    observe_surfaces(&mut entity);
}
