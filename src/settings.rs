//! Jar tuning and appearance settings
//!
//! Every field has a default, so a config file only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Soft but mutually distinct colours used for randomly coloured tokens
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#5eead4", "#60a5fa", "#a78bfa", "#f472b6", "#f59e0b", "#34d399", "#fb7185", "#22d3ee",
    "#93c5fd", "#fbbf24",
];

/// Per-jar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JarConfig {
    // === Physics (per tick) ===
    pub gravity: f32,
    pub friction: f32,
    pub bounce: f32,
    pub rest_threshold: f32,

    // === Container geometry ===
    pub margin: f32,
    pub wall_inset: f32,
    pub corner_radius: f32,

    // === Tokens ===
    pub token_radius: f32,
    pub population_cap: usize,
    pub spawn_inset_x: f32,
    pub spawn_drop_y: f32,
    pub spawn_max_vx: f32,
    pub default_label: String,
    pub default_color: String,
    /// Colours drawn from by `Jar::spawn_random`
    pub palette: Vec<String>,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            bounce: BOUNCE,
            rest_threshold: REST_THRESHOLD,

            margin: JAR_MARGIN,
            wall_inset: WALL_INSET,
            corner_radius: CORNER_RADIUS,

            token_radius: TOKEN_RADIUS,
            population_cap: POPULATION_CAP,
            spawn_inset_x: SPAWN_INSET_X,
            spawn_drop_y: SPAWN_DROP_Y,
            spawn_max_vx: SPAWN_MAX_VX,
            default_label: DEFAULT_LABEL.to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl JarConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded jar config from {}", path.display());
        Ok(config)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("bounce", self.bounce),
            ("rest_threshold", self.rest_threshold),
            ("margin", self.margin),
            ("wall_inset", self.wall_inset),
            ("corner_radius", self.corner_radius),
            ("token_radius", self.token_radius),
            ("spawn_inset_x", self.spawn_inset_x),
            ("spawn_drop_y", self.spawn_drop_y),
            ("spawn_max_vx", self.spawn_max_vx),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite")));
            }
        }

        if self.gravity < 0.0 {
            return Err(invalid("gravity must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid("friction must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.bounce) {
            return Err(invalid("bounce must be within [0, 1]"));
        }
        if self.token_radius <= 0.0 {
            return Err(invalid("token_radius must be > 0"));
        }
        if self.population_cap == 0 || self.population_cap > MAX_POPULATION_CAP {
            return Err(invalid(format!("population_cap must be within [1, {MAX_POPULATION_CAP}]")));
        }
        let non_negative = [
            ("rest_threshold", self.rest_threshold),
            ("margin", self.margin),
            ("wall_inset", self.wall_inset),
            ("corner_radius", self.corner_radius),
            ("spawn_inset_x", self.spawn_inset_x),
            ("spawn_drop_y", self.spawn_drop_y),
            ("spawn_max_vx", self.spawn_max_vx),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(invalid(format!("{name} must be >= 0")));
            }
        }
        if !(2.0 * self.spawn_max_vx).is_finite() {
            return Err(invalid("spawn_max_vx is too large"));
        }
        if self.palette.iter().any(|c| c.trim().is_empty()) {
            return Err(invalid("palette entries must not be empty"));
        }
        Ok(())
    }

    /// Rescale the per-tick constants for a driver ticking at `ticks_per_second`
    /// so motion on screen matches the 60 Hz tuning.
    pub fn retuned_for(&self, ticks_per_second: f32) -> Self {
        if !ticks_per_second.is_finite() || ticks_per_second <= 0.0 {
            return self.clone();
        }
        let s = TICKS_PER_SECOND / ticks_per_second;
        Self {
            gravity: self.gravity * s * s,
            friction: self.friction.powf(s),
            rest_threshold: self.rest_threshold * s,
            spawn_max_vx: self.spawn_max_vx * s,
            ..self.clone()
        }
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}
