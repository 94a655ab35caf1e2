
use slotmap::SlotMap;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    framework::{
        application::Context,
        math::Transform,
        camera::{Camera, CameraRig, WalkCameraRig},
    },
    info,
};

use super::{
    scene::Scene,
    components::{Collectible, Ground, MeshInstance},
    config::{LocomotionFlags, WorldConfig},
    meshes::{Mesh, MeshPool},
    message_board::MessageBoard,
    collection::CollectionTracker,
};

/// Eye level of the walking camera above the ground plane.
pub const EYE_HEIGHT: f32 = 1.7;

const TRUNK_HEIGHT: f32 = 1.8;
const TRUNK_RADIUS: f32 = 0.18;
const CANOPY_RADIUS: f32 = 1.3;

pub fn init_scene(context: &Context) -> Scene {
    let size = context.window.inner_size();
    build_scene(WorldConfig::load(), size.width as f32 / size.height as f32)
}

/// Populates a fresh world from the resolved configuration. Split off from
/// `init_scene` so the world can be built without a window.
#[profiler::function]
pub fn build_scene(config: WorldConfig, aspect_ratio: f32) -> Scene {
    let mut world = hecs::World::new();
    let mut meshes: MeshPool = SlotMap::with_key();
    let mut collection = CollectionTracker::new();
    let mut message_board = MessageBoard::default();

    // Ground plane
    // ------------

    let ground_mesh = meshes.insert(Mesh::plane(config.ground.size, config.ground.color));
    world.spawn((
        Ground,
        MeshInstance { mesh: ground_mesh },
        Transform::IDENTITY,
    ));

    // Tree grid with randomized yaw
    // -----------------------------

    let tree_mesh = meshes.insert(Mesh::tree(TRUNK_HEIGHT, TRUNK_RADIUS, CANOPY_RADIUS));
    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let half = config.trees.extent * 0.5;
    let mut x = -half;
    while x <= half {
        let mut z = -half;
        while z <= half {
            world.spawn((
                MeshInstance { mesh: tree_mesh },
                Transform::from_position(glam::vec3(x, config.trees.y_offset, z))
                    .rotate(glam::Quat::from_rotation_y(rng.gen_range(0.0..std::f32::consts::TAU))),
            ));
            z += config.trees.spacing;
        }
        x += config.trees.spacing;
    }

    // Collectible golden spheres
    // --------------------------

    let sphere_mesh = meshes.insert(Mesh::uv_sphere(
        config.collectibles.radius,
        32,
        16,
        config.collectibles.color,
    ));
    for position in &config.collectibles.positions {
        world.spawn((
            Collectible {
                id: collection.register(),
                radius: config.collectibles.radius,
            },
            MeshInstance { mesh: sphere_mesh },
            Transform::from_position(*position),
        ));
    }

    message_board.draw_styled(&config.messages.prompt);

    if !config.welcome_panel.enabled {
        info!("Welcome panel skipped: disabled for this session.");
    }

    // Walking camera at eye level, facing the grove
    // ---------------------------------------------

    let camera = Camera {
        aspect_ratio,
        fov: 60.0,
        position: glam::vec3(0.0, EYE_HEIGHT, 10.0),
        ..Default::default()
    }.look_at(glam::vec3(0.0, EYE_HEIGHT, 0.0));

    let mut walk_rig = WalkCameraRig::from_camera(camera, 0.2, config.locomotion.speed);
    walk_rig.movement_enabled = config.locomotion.flags().contains(LocomotionFlags::SMOOTH);

    Scene {
        camera_rig: CameraRig::Walk(walk_rig),
        world,
        meshes,
        collection,
        message_board,
        config,
        counters: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt_app::collection::CollectibleState;

    fn default_scene() -> Scene {
        build_scene(WorldConfig::default(), 16.0 / 9.0)
    }

    fn tree_count(scene: &Scene) -> usize {
        let instanced = scene.world.query::<&MeshInstance>().iter().count();
        let collectibles = scene.world.query::<&Collectible>().iter().count();
        let grounds = scene.world.query::<&Ground>().iter().count();
        instanced - collectibles - grounds
    }

    #[test]
    fn default_world_has_one_ground_plane() {
        let scene = default_scene();
        assert_eq!(scene.world.query::<&Ground>().iter().count(), 1);
    }

    #[test]
    fn default_world_grows_a_four_by_four_grove() {
        // extent 30 at spacing 8 puts trees at -15, -7, 1 and 9 on both axes
        let scene = default_scene();
        assert_eq!(tree_count(&scene), 16);
    }

    #[test]
    fn collectibles_start_registered_and_pending() {
        let scene = default_scene();
        assert_eq!(scene.collection.target(), 3);
        assert_eq!(scene.collection.collected_count(), 0);
        assert!(!scene.collection.has_won());
        for (_, collectible) in scene.world.query::<&Collectible>().iter() {
            assert_eq!(
                scene.collection.state_of(collectible.id),
                Some(CollectibleState::Pending),
            );
        }
    }

    #[test]
    fn prompt_message_is_up_from_the_start() {
        let scene = default_scene();
        let message = scene.message_board.current().unwrap();
        assert_eq!(message.text, scene.config.messages.prompt.text);
    }

    #[test]
    fn walking_rig_is_the_default() {
        let scene = default_scene();
        let CameraRig::Walk(rig) = &scene.camera_rig else {
            panic!("expected the walking rig");
        };
        assert!(rig.movement_enabled);
        assert_eq!(scene.camera_rig.camera().position.y, EYE_HEIGHT);
    }

    #[test]
    fn smooth_locomotion_off_disables_walking() {
        let mut config = WorldConfig::default();
        config.locomotion.smooth = false;
        let scene = build_scene(config, 1.0);
        let CameraRig::Walk(rig) = &scene.camera_rig else {
            panic!("expected the walking rig");
        };
        assert!(!rig.movement_enabled);
    }

    #[test]
    fn same_seed_grows_the_same_grove() {
        let a = default_scene();
        let b = default_scene();
        let yaws = |scene: &Scene| -> Vec<glam::Quat> {
            scene.world.query::<(&MeshInstance, &Transform)>()
                .without::<&Collectible>()
                .without::<&Ground>()
                .iter()
                .map(|(_, (_, transform))| transform.rotation)
                .collect()
        };
        assert_eq!(yaws(&a), yaws(&b));
    }
}
