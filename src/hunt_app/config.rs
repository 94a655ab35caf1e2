///! World configuration resolved once at startup.
///! The embedded `assets/world.json` mirrors the built in defaults, an override
///! file can be supplied through the `SPHERE_HUNT_CONFIG` environment variable.

use serde::Deserialize;
use bitflags::bitflags;

use crate::{info, warn};

/// Default world configuration compiled into the binary.
pub const DEFAULT_WORLD_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/world.json"));

bitflags! {
    /// Locomotion capabilities enabled for the session.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LocomotionFlags: u32 {
        const SMOOTH   = 1 << 0;
        const TELEPORT = 1 << 1;
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub size: f32,
    pub color: glam::Vec3,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            color: glam::vec3(0.169, 0.478, 0.043),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TreeGridConfig {
    pub spacing: f32,
    pub extent: f32,
    pub y_offset: f32,
}

impl Default for TreeGridConfig {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            extent: 30.0,
            y_offset: -0.2,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CollectiblesConfig {
    pub radius: f32,
    pub color: glam::Vec3,
    pub positions: Vec<glam::Vec3>,
}

impl Default for CollectiblesConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            color: glam::vec3(1.0, 0.843, 0.0),
            positions: vec![
                glam::vec3(3.0, 0.5, -5.0),
                glam::vec3(-5.0, 0.5, 8.0),
                glam::vec3(10.0, 0.5, -8.0),
            ],
        }
    }
}

/// Text and styling of one overlay message, see `MessageBoard`.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageStyle {
    pub text: String,
    pub color: [u8; 4],
    pub font_size: f32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub prompt: MessageStyle,
    pub win: MessageStyle,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            prompt: MessageStyle {
                text: "Find all the golden spheres!".to_string(),
                color: [255, 255, 255, 255],
                font_size: 80.0,
            },
            win: MessageStyle {
                text: "YOU WIN!".to_string(),
                color: [255, 255, 255, 255],
                font_size: 120.0,
            },
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub smooth: bool,
    pub teleport: bool,
    pub speed: f32,
    pub teleport_distance: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            smooth: true,
            teleport: true,
            speed: 1.5,
            teleport_distance: 2.5,
        }
    }
}

impl LocomotionConfig {
    pub fn flags(&self) -> LocomotionFlags {
        let mut flags = LocomotionFlags::empty();
        if self.smooth {
            flags |= LocomotionFlags::SMOOTH;
        }
        if self.teleport {
            flags |= LocomotionFlags::TELEPORT;
        }
        flags
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WelcomePanelConfig {
    pub enabled: bool,
    pub title: String,
    pub body: Vec<String>,
}

impl Default for WelcomePanelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Welcome to Sphere Hunt".to_string(),
            body: vec![
                "Three golden spheres are hidden in the grove.".to_string(),
                "Click a sphere to collect it.".to_string(),
                "Drag to look around, WASD to walk, right click to teleport.".to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub ground: GroundConfig,
    pub trees: TreeGridConfig,
    pub collectibles: CollectiblesConfig,
    pub messages: MessagesConfig,
    pub locomotion: LocomotionConfig,
    pub welcome_panel: WelcomePanelConfig,
    pub rng_seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground: Default::default(),
            trees: Default::default(),
            collectibles: Default::default(),
            messages: Default::default(),
            locomotion: Default::default(),
            welcome_panel: Default::default(),
            rng_seed: 7,
        }
    }
}

impl WorldConfig {
    pub fn from_string(json: &str) -> serde_json::Result<WorldConfig> {
        serde_json::from_str(json)
    }

    /// Resolves the session configuration: the file named by `SPHERE_HUNT_CONFIG`
    /// when set and valid, the embedded default otherwise. A broken override is
    /// reported and ignored rather than aborting the session.
    /// `SPHERE_HUNT_WELCOME` overrides the welcome panel visibility on top of that.
    #[profiler::function]
    pub fn load() -> WorldConfig {
        let mut config = Self::resolve_file();
        if let Ok(value) = std::env::var("SPHERE_HUNT_WELCOME") {
            config.welcome_panel.enabled = matches!(value.as_str(), "1" | "true" | "yes" | "on");
        }
        config
    }

    fn resolve_file() -> WorldConfig {
        if let Ok(path) = std::env::var("SPHERE_HUNT_CONFIG") {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::from_string(&contents) {
                    Ok(config) => {
                        info!("World configuration loaded from {}", path);
                        return config;
                    },
                    Err(error) => warn!("Ignoring world configuration {}: {}", path, error),
                },
                Err(error) => warn!("Cannot read world configuration {}: {}", path, error),
            }
        }
        Self::from_string(DEFAULT_WORLD_JSON).expect("Failed to parse embedded world configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses() {
        let config = WorldConfig::from_string(DEFAULT_WORLD_JSON).unwrap();
        assert_eq!(config.ground.size, 40.0);
        assert_eq!(config.collectibles.positions.len(), 3);
        assert_eq!(config.messages.prompt.text, "Find all the golden spheres!");
        assert_eq!(config.messages.win.font_size, 120.0);
        assert!(config.locomotion.flags().contains(LocomotionFlags::SMOOTH | LocomotionFlags::TELEPORT));
    }

    #[test]
    fn empty_object_falls_back_to_defaults() {
        let config = WorldConfig::from_string("{}").unwrap();
        assert_eq!(config.trees.spacing, 8.0);
        assert_eq!(config.trees.extent, 30.0);
        assert_eq!(config.collectibles.radius, 0.5);
        assert_eq!(config.locomotion.speed, 1.5);
        assert!(config.welcome_panel.enabled);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config = WorldConfig::from_string(r#"{ "locomotion": { "teleport": false } }"#).unwrap();
        assert!(!config.locomotion.flags().contains(LocomotionFlags::TELEPORT));
        assert!(config.locomotion.flags().contains(LocomotionFlags::SMOOTH));
        assert_eq!(config.locomotion.teleport_distance, 2.5);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(WorldConfig::from_string("{ not json").is_err());
    }
}
