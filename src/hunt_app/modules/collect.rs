///! Click to collect: casts a ray from the cursor into the scene, despawns the
///! nearest collectible sphere it pierces and reports the pick to the
///! collection tracker.

use hecs::Entity;

use crate::{
    hunt_app::{
        collection::{Activation, CollectibleId},
        components::Collectible,
        scene::Scene,
    },
    framework::{
        math::{Ray, Transform},
        updater::{
            UpdaterModule,
            UpdateContext,
            UpdateResultAction,
            InputUpdateResult,
            AfterRenderContext
        }
    },
    info,
};

pub struct CollectUpdater;

impl CollectUpdater {
    pub fn new() -> Self {
        counters::register!("collect_counter");
        Self
    }
}

impl UpdaterModule<Scene> for CollectUpdater {

    #[profiler::function]
    fn input(&mut self, context: &mut UpdateContext<Scene>) -> InputUpdateResult {
        if !context.input.mouse_pressed(0) {
            return InputUpdateResult::default();
        }
        let Some(cursor) = context.input.mouse() else {
            return InputUpdateResult::default();
        };

        let size = context.window.inner_size();
        let scene = &mut *context.scene;
        let Some(ray) = Ray::from_screen(scene.camera_rig.camera(), cursor, (size.width, size.height)) else {
            return InputUpdateResult::default();
        };
        let Some((entity, id)) = nearest_hit(scene, &ray) else {
            return InputUpdateResult::default();
        };

        // The sphere is gone before any progress is announced.
        scene.world.despawn(entity).ok();

        match scene.collection.on_activate(id) {
            Activation::Collected { collected, remaining } => {
                counters::sample!("collect_counter", 1.0);
                info!("Collected {} of {} golden spheres", collected, collected + remaining);
            },
            Activation::Won => {
                counters::sample!("collect_counter", 1.0);
                info!("All {} golden spheres collected", scene.collection.target());
                scene.message_board.draw_styled(&scene.config.messages.win);
            },
            Activation::Ignored => {},
        }

        InputUpdateResult {
            handled: true,
            result: UpdateResultAction::Redraw,
        }
    }

    // Runs once per presented frame.
    fn after_render(&mut self, state: &mut AfterRenderContext<Scene>) {
        state.scene.counters.renders += 1;
    }
}

/// The collectible closest to the ray origin among those the ray pierces.
fn nearest_hit(scene: &Scene, ray: &Ray) -> Option<(Entity, CollectibleId)> {
    let mut nearest: Option<(Entity, CollectibleId, f32)> = None;
    for (entity, (collectible, transform)) in scene.world.query::<(&Collectible, &Transform)>().iter() {
        if let Some(t) = ray.intersect_sphere(transform.position, collectible.radius) {
            if nearest.map_or(true, |(_, _, nearest_t)| t < nearest_t) {
                nearest = Some((entity, collectible.id, t));
            }
        }
    }
    nearest.map(|(entity, id, _)| (entity, id))
}
