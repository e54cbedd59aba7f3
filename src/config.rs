//! Construction parameters and placement presets
//!
//! Everything is fixed for the lifetime of a [`crate::sim::World`]. Loaded
//! from JSON on native builds; missing fields take the named preset's values
//! (Corridor when no preset is named).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Placement variants observed in the field layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlacementPreset {
    /// Few large obstacles, overlap check only
    Classic,
    /// Tightly packed, no separation buffer
    Packed,
    /// Wide spacing with a clear corridor along the top edge
    #[default]
    Corridor,
}

impl PlacementPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementPreset::Classic => "Classic",
            PlacementPreset::Packed => "Packed",
            PlacementPreset::Corridor => "Corridor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(PlacementPreset::Classic),
            "packed" => Some(PlacementPreset::Packed),
            "corridor" => Some(PlacementPreset::Corridor),
            _ => None,
        }
    }

    /// Number of obstacles requested
    pub fn obstacle_count(&self) -> usize {
        match self {
            PlacementPreset::Classic => 5,
            PlacementPreset::Packed => 10,
            PlacementPreset::Corridor => OBSTACLE_COUNT,
        }
    }

    /// Hit-box radius of each obstacle
    pub fn obstacle_radius(&self) -> f32 {
        match self {
            PlacementPreset::Classic => 100.0,
            PlacementPreset::Packed => 60.0,
            PlacementPreset::Corridor => OBSTACLE_RADIUS,
        }
    }

    /// Extra gap between hit-boxes
    pub fn separation_buffer(&self) -> f32 {
        match self {
            PlacementPreset::Classic | PlacementPreset::Packed => 0.0,
            PlacementPreset::Corridor => SEPARATION_BUFFER,
        }
    }

    /// Whether edge and margin rejection runs at all
    pub fn bounds_checks(&self) -> bool {
        match self {
            PlacementPreset::Classic => false,
            PlacementPreset::Packed => true,
            PlacementPreset::Corridor => true,
        }
    }

    pub fn top_margin(&self) -> f32 {
        match self {
            PlacementPreset::Classic | PlacementPreset::Packed => 0.0,
            PlacementPreset::Corridor => TOP_MARGIN,
        }
    }
}

/// What the pursuer does once the target is within one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArrivalBehavior {
    /// Land exactly on the target and stop
    #[default]
    Snap,
    /// Stop where it is, up to one step short of the target
    Hold,
}

/// World construction parameters
///
/// On load the named preset is applied first and any field present in the
/// file overrides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    /// Preset these values were derived from (informational)
    pub preset: PlacementPreset,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Band along the top edge obstacles must stay clear of
    pub top_margin: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    pub obstacle_radius: f32,
    /// Extra gap enforced between obstacle hit-boxes
    pub separation_buffer: f32,
    /// Candidate budget for placement
    pub max_placement_attempts: u32,
    /// Reject candidates whose sprite leaves the arena or that intrude on the margins
    pub bounds_checks: bool,
    /// Vertical clearance in multiples of the obstacle radius
    pub vertical_margin_factor: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub sprite_vertical_bias: f32,

    // === Pursuer ===
    pub pursuer_radius: f32,
    /// Maximum displacement per tick
    pub pursuer_speed_cap: f32,
    pub arrival: ArrivalBehavior,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_preset(PlacementPreset::default())
    }
}

impl Config {
    /// Create a config from a placement preset (applies preset defaults)
    pub fn from_preset(preset: PlacementPreset) -> Self {
        let mut config = Self {
            preset,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            top_margin: 0.0,
            obstacle_count: 0,
            obstacle_radius: 0.0,
            separation_buffer: 0.0,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            bounds_checks: false,
            vertical_margin_factor: VERTICAL_MARGIN_FACTOR,
            sprite_width: SPRITE_WIDTH,
            sprite_height: SPRITE_HEIGHT,
            sprite_vertical_bias: SPRITE_VERTICAL_BIAS,
            pursuer_radius: PURSUER_RADIUS,
            pursuer_speed_cap: PURSUER_SPEED_CAP,
            arrival: ArrivalBehavior::Snap,
        };
        config.apply_preset(preset);
        config
    }

    /// Apply a placement preset (updates placement-dependent settings only)
    pub fn apply_preset(&mut self, preset: PlacementPreset) {
        self.preset = preset;
        self.obstacle_count = preset.obstacle_count();
        self.obstacle_radius = preset.obstacle_radius();
        self.separation_buffer = preset.separation_buffer();
        self.bounds_checks = preset.bounds_checks();
        self.top_margin = preset.top_margin();
    }

    /// Same config with a different arena size.
    ///
    /// The top margin keeps its share of the arena height so it always stays
    /// inside the new arena.
    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        if self.arena_height > 0.0 {
            self.top_margin *= height / self.arena_height;
        }
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load config from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

/// On-disk form of [`Config`]: every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    preset: Option<PlacementPreset>,
    arena_width: Option<f32>,
    arena_height: Option<f32>,
    top_margin: Option<f32>,
    obstacle_count: Option<usize>,
    obstacle_radius: Option<f32>,
    separation_buffer: Option<f32>,
    max_placement_attempts: Option<u32>,
    bounds_checks: Option<bool>,
    vertical_margin_factor: Option<f32>,
    sprite_width: Option<f32>,
    sprite_height: Option<f32>,
    sprite_vertical_bias: Option<f32>,
    pursuer_radius: Option<f32>,
    pursuer_speed_cap: Option<f32>,
    arrival: Option<ArrivalBehavior>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let mut config = Config::from_preset(file.preset.unwrap_or_default());
        if file.arena_width.is_some() || file.arena_height.is_some() {
            let width = file.arena_width.unwrap_or(config.arena_width);
            let height = file.arena_height.unwrap_or(config.arena_height);
            config = config.with_arena(width, height);
        }

        let ConfigFile {
            top_margin,
            obstacle_count,
            obstacle_radius,
            separation_buffer,
            max_placement_attempts,
            bounds_checks,
            vertical_margin_factor,
            sprite_width,
            sprite_height,
            sprite_vertical_bias,
            pursuer_radius,
            pursuer_speed_cap,
            arrival,
            ..
        } = file;
        config.top_margin = top_margin.unwrap_or(config.top_margin);
        config.obstacle_count = obstacle_count.unwrap_or(config.obstacle_count);
        config.obstacle_radius = obstacle_radius.unwrap_or(config.obstacle_radius);
        config.separation_buffer = separation_buffer.unwrap_or(config.separation_buffer);
        config.max_placement_attempts =
            max_placement_attempts.unwrap_or(config.max_placement_attempts);
        config.bounds_checks = bounds_checks.unwrap_or(config.bounds_checks);
        config.vertical_margin_factor =
            vertical_margin_factor.unwrap_or(config.vertical_margin_factor);
        config.sprite_width = sprite_width.unwrap_or(config.sprite_width);
        config.sprite_height = sprite_height.unwrap_or(config.sprite_height);
        config.sprite_vertical_bias = sprite_vertical_bias.unwrap_or(config.sprite_vertical_bias);
        config.pursuer_radius = pursuer_radius.unwrap_or(config.pursuer_radius);
        config.pursuer_speed_cap = pursuer_speed_cap.unwrap_or(config.pursuer_speed_cap);
        config.arrival = arrival.unwrap_or(config.arrival);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_corridor() {
        let config = Config::default();
        assert_eq!(config.preset, PlacementPreset::Corridor);
        assert_eq!(config.obstacle_count, 10);
        assert_eq!(config.obstacle_radius, 40.0);
        assert_eq!(config.separation_buffer, 150.0);
        assert_eq!(config.top_margin, 260.0);
        assert!(config.bounds_checks);
        assert_eq!(config.max_placement_attempts, 500);
        assert_eq!(config.arrival, ArrivalBehavior::Snap);
    }

    #[test]
    fn test_classic_preset() {
        let config = Config::from_preset(PlacementPreset::Classic);
        assert_eq!(config.obstacle_count, 5);
        assert_eq!(config.obstacle_radius, 100.0);
        assert_eq!(config.separation_buffer, 0.0);
        assert!(!config.bounds_checks);
        assert_eq!(config.top_margin, 0.0);
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in [
            PlacementPreset::Classic,
            PlacementPreset::Packed,
            PlacementPreset::Corridor,
        ] {
            assert_eq!(PlacementPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(PlacementPreset::from_str("PACKED"), Some(PlacementPreset::Packed));
        assert_eq!(PlacementPreset::from_str("spiral"), None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r#"{ "obstacle_count": 3, "arrival": "Hold" }"#).unwrap();
        assert_eq!(config.obstacle_count, 3);
        assert_eq!(config.arrival, ArrivalBehavior::Hold);
        assert_eq!(config.arena_width, 1280.0);
        assert_eq!(config.separation_buffer, 150.0);
    }

    #[test]
    fn test_json_preset_applies_before_fields() {
        let config = Config::from_json(r#"{ "preset": "Packed" }"#).unwrap();
        assert_eq!(config, Config::from_preset(PlacementPreset::Packed));
        assert_eq!(config.obstacle_radius, 60.0);
        assert_eq!(config.separation_buffer, 0.0);
        assert_eq!(config.top_margin, 0.0);

        let config =
            Config::from_json(r#"{ "preset": "Classic", "obstacle_count": 7 }"#).unwrap();
        assert_eq!(config.preset, PlacementPreset::Classic);
        assert_eq!(config.obstacle_radius, 100.0);
        assert_eq!(config.obstacle_count, 7);
    }

    #[test]
    fn test_with_arena_keeps_top_margin_inside() {
        let config = Config::default().with_arena(640.0, 240.0);
        assert!(config.top_margin < config.arena_height);
        assert!((config.top_margin - 260.0 / 3.0).abs() < 1e-3);

        let unchanged = Config::default().with_arena(1280.0, 720.0);
        assert_eq!(unchanged.top_margin, 260.0);
    }

    #[test]
    fn test_json_arena_height_scales_preset_margin() {
        let config = Config::from_json(r#"{ "arena_height": 180.0 }"#).unwrap();
        assert!((config.top_margin - 65.0).abs() < 1e-3);

        // An explicit margin wins over the scaled one
        let config =
            Config::from_json(r#"{ "arena_height": 180.0, "top_margin": 20.0 }"#).unwrap();
        assert_eq!(config.top_margin, 20.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Config::from_json("{ not json").is_err());
        assert!(Config::from_json(r#"{ "obstacle_count": -1 }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::from_preset(PlacementPreset::Packed).with_arena(800.0, 600.0);
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load(std::path::Path::new("/nonexistent/obstacle-chase.json"));
        assert_eq!(config, Config::default());
    }
}
