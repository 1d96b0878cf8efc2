//! Tuning constants for a run. `GameConfig::default()` is the classic game; a page can
//! override any subset of fields through JSON (feature `serde_json`).

use crate::error::{GameError, Result};

/// Ship triangle in canvas coordinates before the player offset is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShipGeometry {
    pub front: i32,
    pub back: i32,
    pub left: i32,
    pub center: i32,
    pub right: i32,
}

impl Default for ShipGeometry {
    fn default() -> Self {
        Self {
            front: 230,
            back: 250,
            left: 240,
            center: 250,
            right: 260,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// DOM id of the canvas to draw on; created if missing.
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
    /// Height of one canyon row in pixels.
    pub row_height: u32,
    pub initial_left: f64,
    pub initial_right: f64,
    /// Distance from the screen edge at which a wall bounces back.
    pub bounce_margin: f64,
    /// Pixels a wall moves per tick in its chosen direction.
    pub wall_step: f64,
    pub veer_chance: f64,
    pub veer_ticks: u32,
    pub tick_ms: i32,
    /// Pixels the ship moves per keydown.
    pub move_step: i32,
    pub ship: ShipGeometry,
    /// Fixed RNG seed; `None` draws one from the browser.
    pub seed: Option<u64>,
    pub show_live_score: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "screen".to_string(),
            width: 500,
            height: 500,
            row_height: 10,
            initial_left: 50.0,
            initial_right: 450.0,
            bounce_margin: 20.0,
            wall_step: 2.5,
            veer_chance: 0.01,
            veer_ticks: 20,
            tick_ms: 10,
            move_step: 5,
            ship: ShipGeometry::default(),
            seed: None,
            show_live_score: false,
        }
    }
}

impl GameConfig {
    /// Number of canyon segments covering the canvas height.
    pub fn segment_count(&self) -> usize {
        (self.height / self.row_height.max(1)) as usize
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));
        if self.width == 0 || self.height == 0 {
            return invalid("canvas must have a non-zero size");
        }
        if self.row_height == 0 || self.segment_count() == 0 {
            return invalid("row_height must be positive and no taller than the canvas");
        }
        if self.initial_left >= self.initial_right {
            return invalid("initial_left must be left of initial_right");
        }
        if !(0.0..=1.0).contains(&self.veer_chance) {
            return invalid("veer_chance must be within [0, 1]");
        }
        if self.tick_ms <= 0 {
            return invalid("tick_ms must be positive");
        }
        if self.wall_step < 0.0 || self.bounce_margin < 0.0 {
            return invalid("wall_step and bounce_margin must not be negative");
        }
        let ship = &self.ship;
        if ship.left >= ship.right || ship.front >= ship.back {
            return invalid("ship geometry must have left < right and front < back");
        }
        Ok(())
    }

    /// Parses a partial JSON config; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
