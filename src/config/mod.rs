//! Game configuration: defaults baked into the binary, optionally
//! overridden by a RON file next to the executable's working directory.

use bevy::prelude::*;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::*;

pub const CONFIG_FILE: &str = "wanderglade.ron";

/// Largest map edge, in tiles. The map is uploaded as one texel per tile
/// and WebGL2 caps 2D textures at 2048 per side.
pub const MAX_MAP_TILES: u32 = 2048;

// ═══════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub map: MapConfig,
    pub player: PlayerConfig,
    pub npc: NpcConfig,
    pub npc_count: usize,
    /// Fixes both the terrain and NPC placement when set.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    pub tile_size: f32,
    pub noise_scale: f64,
}

/// Player body. `speed` is pixels per key event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    pub speed: f32,
}

/// NPC body. `speed` is pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NpcConfig {
    pub radius: f32,
    pub speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            map: MapConfig::default(),
            player: PlayerConfig::default(),
            npc: NpcConfig::default(),
            npc_count: NPC_COUNT,
            seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wanderglade".into(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
        }
    }
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            radius: NPC_RADIUS,
            speed: NPC_SPEED,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            tile_size: TILE_SIZE,
            noise_scale: NOISE_SCALE,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        let config: GameConfig =
            ron::from_str(text).map_err(|e| format!("Parse failed: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make the window, map, or bodies degenerate.
    /// Every float must be finite. Positions are never validated; actors may
    /// roam off-canvas.
    pub fn validate(&self) -> Result<(), String> {
        let window = &self.window;
        if !window.width.is_finite()
            || !window.height.is_finite()
            || window.width <= 0.0
            || window.height <= 0.0
        {
            return Err(format!(
                "window size must be finite and positive, got {}x{}",
                window.width, window.height
            ));
        }

        let map = &self.map;
        if map.width == 0 || map.height == 0 {
            return Err(format!(
                "map must have at least one tile, got {}x{}",
                map.width, map.height
            ));
        }
        if map.width > MAX_MAP_TILES || map.height > MAX_MAP_TILES {
            return Err(format!(
                "map is limited to {} tiles per side, got {}x{}",
                MAX_MAP_TILES, map.width, map.height
            ));
        }
        if !map.tile_size.is_finite() || map.tile_size <= 0.0 {
            return Err(format!("tile_size must be finite and positive, got {}", map.tile_size));
        }
        if !map.noise_scale.is_finite() {
            return Err(format!("noise_scale must be finite, got {}", map.noise_scale));
        }

        let bodies = [
            ("player", self.player.radius, self.player.speed),
            ("npc", self.npc.radius, self.npc.speed),
        ];
        for (label, radius, speed) in bodies {
            if !radius.is_finite() || !speed.is_finite() || radius < 0.0 || speed < 0.0 {
                return Err(format!(
                    "{} radius and speed must be finite and non-negative, got radius={} speed={}",
                    label, radius, speed
                ));
            }
        }
        Ok(())
    }

    /// The noise generator takes a 32-bit seed; fold the 64-bit one.
    pub fn noise_seed(&self) -> Option<u32> {
        self.seed.map(|s| (s ^ (s >> 32)) as u32)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════

/// Where the active config came from. Kept as a resource so the outcome
/// can be logged once the log subscriber is up.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Defaults,
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid { path: PathBuf, error: String },
}

/// Read and parse `path`. Never fails: any problem falls back to defaults
/// and is described by the returned `ConfigSource`.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config(path: &Path) -> (GameConfig, ConfigSource) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return (GameConfig::default(), ConfigSource::Missing(path.to_path_buf()));
        }
        Err(e) => {
            return (
                GameConfig::default(),
                ConfigSource::Invalid {
                    path: path.to_path_buf(),
                    error: format!("Read failed: {}", e),
                },
            );
        }
    };

    match GameConfig::from_ron_str(&text) {
        Ok(config) => (config, ConfigSource::Loaded(path.to_path_buf())),
        Err(error) => (
            GameConfig::default(),
            ConfigSource::Invalid {
                path: path.to_path_buf(),
                error,
            },
        ),
    }
}

/// No filesystem in the browser.
#[cfg(target_arch = "wasm32")]
pub fn load_config(_path: &Path) -> (GameConfig, ConfigSource) {
    (GameConfig::default(), ConfigSource::Defaults)
}

/// Startup system: report which config is in effect.
pub fn log_config_source(source: Option<Res<ConfigSource>>, config: Res<GameConfig>) {
    match source.as_deref() {
        Some(ConfigSource::Loaded(path)) => {
            info!("[Config] Loaded {}", path.display());
        }
        Some(ConfigSource::Missing(path)) => {
            info!("[Config] {} not found, using defaults", path.display());
        }
        Some(ConfigSource::Invalid { path, error }) => {
            warn!("[Config] Ignoring {}: {}. Using defaults.", path.display(), error);
        }
        Some(ConfigSource::Defaults) | None => {
            info!("[Config] Using built-in defaults");
        }
    }
    info!(
        "[Config] map {}x{} @ {}px, {} NPCs, seed {:?}",
        config.map.width, config.map.height, config.map.tile_size, config.npc_count, config.seed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_constants() {
        let config = GameConfig::default();
        assert_eq!(config.map.width, 1000);
        assert_eq!(config.map.height, 1000);
        assert_eq!(config.map.tile_size, 10.0);
        assert_eq!(config.map.noise_scale, 0.1);
        assert_eq!(config.player.radius, 10.0);
        assert_eq!(config.player.speed, 5.0);
        assert_eq!(config.npc.radius, 5.0);
        assert_eq!(config.npc.speed, 2.0);
        assert_eq!(config.npc_count, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_keeps_other_defaults() {
        let config = GameConfig::from_ron_str("(npc_count: 3, seed: Some(42))").unwrap();
        assert_eq!(config.npc_count, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.map, MapConfig::default());
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_nested_ron_override() {
        let text = r#"(
            map: (width: 64, height: 32, tile_size: 8.0),
            npc: (radius: 4.0, speed: 3.0),
        )"#;
        let config = GameConfig::from_ron_str(text).unwrap();
        assert_eq!(config.map.width, 64);
        assert_eq!(config.map.height, 32);
        assert_eq!(config.map.tile_size, 8.0);
        assert_eq!(config.map.noise_scale, NOISE_SCALE);
        assert_eq!(config.npc.radius, 4.0);
        assert_eq!(config.npc.speed, 3.0);
    }

    #[test]
    fn test_malformed_ron_is_rejected() {
        let err = GameConfig::from_ron_str("(npc_count: \"many\")").unwrap_err();
        assert!(err.starts_with("Parse failed"), "unexpected error: {}", err);
    }

    #[test]
    fn test_validation_rejects_empty_map() {
        let err = GameConfig::from_ron_str("(map: (width: 0))").unwrap_err();
        assert!(err.contains("at least one tile"), "unexpected error: {}", err);
    }

    #[test]
    fn test_validation_rejects_negative_speed() {
        let mut config = GameConfig::default();
        config.npc.speed = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_window() {
        let err = GameConfig::from_ron_str("(window: (width: inf))").unwrap_err();
        assert!(err.contains("window size"), "unexpected error: {}", err);
        assert!(GameConfig::from_ron_str("(window: (width: inf, height: NaN))").is_err());
        assert!(GameConfig::from_ron_str("(window: (height: NaN))").is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_map_and_bodies() {
        assert!(GameConfig::from_ron_str("(map: (tile_size: NaN))").is_err());
        assert!(GameConfig::from_ron_str("(map: (tile_size: inf))").is_err());
        assert!(GameConfig::from_ron_str("(map: (noise_scale: NaN))").is_err());
        assert!(GameConfig::from_ron_str("(player: (radius: NaN))").is_err());
        assert!(GameConfig::from_ron_str("(npc: (speed: inf))").is_err());
    }

    #[test]
    fn test_validation_caps_map_size() {
        let err = GameConfig::from_ron_str("(map: (width: 10000))").unwrap_err();
        assert!(err.contains("limited to 2048"), "unexpected error: {}", err);
        assert!(GameConfig::from_ron_str("(map: (height: 2049))").is_err());
        let edge = GameConfig::from_ron_str("(map: (width: 2048, height: 2048))").unwrap();
        assert_eq!(edge.map.width, MAX_MAP_TILES);
    }

    #[test]
    fn test_partial_body_section_keeps_its_own_defaults() {
        let config = GameConfig::from_ron_str("(npc: (radius: 4.0), player: (speed: 7.0))").unwrap();
        assert_eq!(config.npc.radius, 4.0);
        assert_eq!(config.npc.speed, NPC_SPEED);
        assert_eq!(config.player.radius, PLAYER_RADIUS);
        assert_eq!(config.player.speed, 7.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = Path::new("definitely/not/here/wanderglade.ron");
        let (config, source) = load_config(path);
        assert_eq!(config, GameConfig::default());
        assert_eq!(source, ConfigSource::Missing(path.to_path_buf()));
    }

    #[test]
    fn test_noise_seed_is_stable() {
        let config = GameConfig {
            seed: Some(0x1234_5678_9abc_def0),
            ..default()
        };
        assert_eq!(config.noise_seed(), config.noise_seed());
        assert!(GameConfig::default().noise_seed().is_none());
    }
}
