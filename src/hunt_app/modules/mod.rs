
pub mod mesh;

mod collect;
pub use collect::CollectUpdater;

mod teleport;
pub use teleport::TeleportUpdater;
