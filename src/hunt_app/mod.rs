
pub mod scene;
pub mod components;
pub mod modules;
pub mod gui_modules;
pub mod collection;
pub mod config;
pub mod meshes;
pub mod message_board;

mod define_renderer;
pub use define_renderer::define_renderer;

mod define_updater;
pub use define_updater::define_updater;

mod style_gui;
pub use style_gui::*;

pub mod init_scene;
pub use init_scene::init_scene;
