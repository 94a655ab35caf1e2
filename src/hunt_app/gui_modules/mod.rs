
mod collection_gui;
pub use collection_gui::CollectionGui;

mod message_overlay;
pub use message_overlay::MessageOverlayGui;

mod welcome_panel;
pub use welcome_panel::WelcomePanelGui;

mod camera_gui;
pub use camera_gui::CameraGuiModule;

#[cfg(feature = "stats")]
pub mod stats_gui;

#[cfg(feature = "counters")]
pub mod counters_gui;
