mod framework;
mod hunt_app;

use crate::{
    framework::application::{self, ApplicationDescriptor, RunParams},
    hunt_app::{define_renderer, define_updater, init_scene, style_gui},
};

fn main() {
    env_logger::init();
    profiler::session_begin!("sphere-hunt-app");
    counters::init!();
    application::run(
        ApplicationDescriptor {
            init_renderer: define_renderer,
            init_updater:  define_updater,
            init_scene,
            style_gui,
        },
        RunParams {
            window_name: "Sphere Hunt",
            ..Default::default()
        },
    );
    counters::deinit!();
}
