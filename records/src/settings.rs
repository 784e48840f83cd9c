use serde::{Deserialize, Serialize};

use crate::RecordError;

/// Player-chosen ship tuning and colours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Thrust value fed into per-frame ship acceleration
    pub thrust: f32,
    pub color_stroke: String,
    pub color_fill: String,
    pub color_laser: String,
}

impl Settings {
    pub const THRUST_DEFAULT: f32 = 2.0;
    pub const THRUST_MIN: f32 = 1.0;
    pub const THRUST_MAX: f32 = 3.0;
    pub const STROKE_DEFAULT: &'static str = "#FFFFFF";
    pub const FILL_DEFAULT: &'static str = "#FFFFFF";
    pub const LASER_DEFAULT: &'static str = "#FF0000";

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Replace out-of-range values with something the game can use.
    ///
    /// Thrust is clamped to the settings slider range; a non-finite thrust or
    /// a colour that is not `#RRGGBB` falls back to its default.
    pub fn validated(mut self) -> Self {
        self.thrust = if self.thrust.is_finite() {
            self.thrust.clamp(Self::THRUST_MIN, Self::THRUST_MAX)
        } else {
            Self::THRUST_DEFAULT
        };
        if !is_hex_colour(&self.color_stroke) {
            self.color_stroke = Self::STROKE_DEFAULT.to_string();
        }
        if !is_hex_colour(&self.color_fill) {
            self.color_fill = Self::FILL_DEFAULT.to_string();
        }
        if !is_hex_colour(&self.color_laser) {
            self.color_laser = Self::LASER_DEFAULT.to_string();
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thrust: Self::THRUST_DEFAULT,
            color_stroke: Self::STROKE_DEFAULT.to_string(),
            color_fill: Self::FILL_DEFAULT.to_string(),
            color_laser: Self::LASER_DEFAULT.to_string(),
        }
    }
}

fn is_hex_colour(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
