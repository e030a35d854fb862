//! Scene-setup materials: the see-through glass substitute and per-model
//! shadow flags, applied once when a model's scene instance is ready.

use bevy::ecs::system::SystemParam;
use bevy::gltf::GltfMaterialName;
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::scene::models::ModelRoot;

/// Shared handle for every glass-substituted mesh.
#[derive(Resource, Clone, Debug)]
pub struct GlassMaterial(pub Handle<StandardMaterial>);

impl FromWorld for GlassMaterial {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        Self(materials.add(glass_material()))
    }
}

/// Transmissive, alpha-blended material for see-through parts.
pub fn glass_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.5),
        specular_transmission: 1.0,
        perceptual_roughness: 0.1,
        metallic: 0.0,
        ior: 1.45,
        thickness: 0.1,
        reflectance: 0.5,
        clearcoat: 1.0,
        clearcoat_perceptual_roughness: 0.05,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

pub fn scene_materials_plugin(app: &mut App) {
    app.init_resource::<GlassMaterial>()
        .add_observer(apply_scene_materials);
}

/// Queries and commands for dressing one model's meshes.
#[derive(SystemParam)]
pub struct ModelMaterials<'w, 's> {
    commands: Commands<'w, 's>,
    roots: Query<'w, 's, &'static ModelRoot>,
    children: Query<'w, 's, &'static Children>,
    meshes: Query<'w, 's, Option<&'static GltfMaterialName>, With<Mesh3d>>,
    glass: Res<'w, GlassMaterial>,
}

impl ModelMaterials<'_, '_> {
    /// Shadow flags for every mesh of the model, then glass substitution by
    /// glTF material name. Glass never casts a shadow. Returns the number of
    /// glass meshes.
    pub fn dress(&mut self, root: Entity) -> usize {
        let Ok(model) = self.roots.get(root) else {
            return 0;
        };
        let glass_name = model.spec.glass_material.as_deref();

        let mut substituted = 0usize;
        for entity in self.children.iter_descendants(root) {
            let Ok(material_name) = self.meshes.get(entity) else {
                continue;
            };
            let mut mesh = self.commands.entity(entity);
            if !model.spec.receive_shadow {
                mesh.insert(NotShadowReceiver);
            }

            let is_glass = matches!(
                (material_name, glass_name),
                (Some(GltfMaterialName(name)), Some(glass)) if name == glass
            );
            if is_glass {
                mesh.insert((MeshMaterial3d(self.glass.0.clone()), NotShadowCaster));
                substituted += 1;
            } else if !model.spec.cast_shadow {
                mesh.insert(NotShadowCaster);
            }
        }

        if substituted > 0 {
            debug!("{}: {substituted} glass meshes", model.spec.src);
        }
        substituted
    }
}

pub fn apply_scene_materials(trigger: Trigger<SceneInstanceReady>, mut materials: ModelMaterials) {
    materials.dress(trigger.entity());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;

    use crate::data::ModelSpec;
    use crate::hover::ObjectId;

    const GLASS: Handle<StandardMaterial> = Handle::weak_from_u128(0x6c61_7373);
    const PAINT: Handle<StandardMaterial> = Handle::weak_from_u128(0x7061_696e);

    #[test]
    fn glass_is_blended_and_transmissive() {
        let glass = glass_material();
        assert_eq!(glass.alpha_mode, AlphaMode::Blend);
        assert_eq!(glass.specular_transmission, 1.0);
        assert!(glass.base_color.alpha() < 1.0);
    }

    struct Scene {
        world: World,
        root: Entity,
        glass_mesh: Entity,
        painted_mesh: Entity,
    }

    impl Scene {
        fn new(spec: ModelSpec) -> Self {
            let mut world = World::new();
            world.insert_resource(GlassMaterial(GLASS));
            let root = world.spawn(ModelRoot { id: ObjectId(0), spec }).id();
            let body = world.spawn(Transform::default()).set_parent(root).id();
            let glass_mesh = world
                .spawn((
                    Mesh3d::default(),
                    MeshMaterial3d(PAINT),
                    GltfMaterialName("MyMixedMaterial".to_string()),
                ))
                .set_parent(body)
                .id();
            let painted_mesh = world
                .spawn((
                    Mesh3d::default(),
                    MeshMaterial3d(PAINT),
                    GltfMaterialName("Paint".to_string()),
                ))
                .set_parent(root)
                .id();
            Self {
                world,
                root,
                glass_mesh,
                painted_mesh,
            }
        }

        fn dress(&mut self, root: Entity) -> usize {
            let mut state: SystemState<ModelMaterials> = SystemState::new(&mut self.world);
            let substituted = state.get_mut(&mut self.world).dress(root);
            state.apply(&mut self.world);
            substituted
        }

        fn material(&self, mesh: Entity) -> &Handle<StandardMaterial> {
            &self
                .world
                .get::<MeshMaterial3d<StandardMaterial>>(mesh)
                .unwrap()
                .0
        }

        fn has<T: Component>(&self, mesh: Entity) -> bool {
            self.world.get::<T>(mesh).is_some()
        }
    }

    #[test]
    fn named_material_becomes_shadowless_glass() {
        let mut scene = Scene::new(ModelSpec::new("a.glb", "/a"));
        assert_eq!(scene.dress(scene.root), 1);

        assert_eq!(scene.material(scene.glass_mesh), &GLASS);
        assert!(scene.has::<NotShadowCaster>(scene.glass_mesh));
        assert!(!scene.has::<NotShadowReceiver>(scene.glass_mesh));

        assert_eq!(scene.material(scene.painted_mesh), &PAINT);
        assert!(!scene.has::<NotShadowCaster>(scene.painted_mesh));
        assert!(!scene.has::<NotShadowReceiver>(scene.painted_mesh));
    }

    #[test]
    fn disabled_shadows_mark_every_mesh() {
        let mut spec = ModelSpec::new("a.glb", "/a");
        spec.cast_shadow = false;
        spec.receive_shadow = false;
        let mut scene = Scene::new(spec);
        scene.dress(scene.root);

        for mesh in [scene.glass_mesh, scene.painted_mesh] {
            assert!(scene.has::<NotShadowCaster>(mesh));
            assert!(scene.has::<NotShadowReceiver>(mesh));
        }
        assert_eq!(scene.material(scene.painted_mesh), &PAINT);
    }

    #[test]
    fn no_glass_name_substitutes_nothing() {
        let mut spec = ModelSpec::new("a.glb", "/a");
        spec.glass_material = None;
        let mut scene = Scene::new(spec);

        assert_eq!(scene.dress(scene.root), 0);
        assert_eq!(scene.material(scene.glass_mesh), &PAINT);
        assert!(!scene.has::<NotShadowCaster>(scene.glass_mesh));
    }

    #[test]
    fn roots_without_a_model_are_left_alone() {
        let mut scene = Scene::new(ModelSpec::new("a.glb", "/a"));
        let stray = scene.world.spawn(Transform::default()).id();
        let mesh = scene
            .world
            .spawn((
                Mesh3d::default(),
                MeshMaterial3d(PAINT),
                GltfMaterialName("MyMixedMaterial".to_string()),
            ))
            .set_parent(stray)
            .id();

        assert_eq!(scene.dress(stray), 0);
        assert_eq!(scene.material(mesh), &PAINT);
        assert!(!scene.has::<NotShadowCaster>(mesh));
    }
}
