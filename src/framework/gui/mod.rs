
mod gui;
pub use gui::*;

mod update_module;
pub use update_module::*;

mod render_module;
pub use render_module::*;
