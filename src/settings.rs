//! Game settings and preferences
//!
//! Persisted as JSON. Every field has a valid range; values read from disk are
//! clamped into it, and missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::z_score;

/// Error type for settings persistence
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading/writing the settings file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed settings JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// AI skill percentile; higher aims closer to the puck
    pub ai_skill: u32,
    /// Paddle height
    pub paddle_size: f32,
    /// Scale from mouse wheel ticks to human paddle travel
    pub mouse_wheel_sensitivity: f32,
    /// First score to reach this wins
    pub winning_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_skill: Self::AI_SKILL_DEFAULT,
            paddle_size: Self::PADDLE_SIZE_DEFAULT,
            mouse_wheel_sensitivity: Self::MOUSE_WHEEL_SENSITIVITY_DEFAULT,
            winning_score: Self::WINNING_SCORE_DEFAULT,
        }
    }
}

impl Settings {
    pub const AI_SKILL_MIN: u32 = 5;
    pub const AI_SKILL_DEFAULT: u32 = 70;
    pub const AI_SKILL_MAX: u32 = 95;

    pub const PADDLE_SIZE_MIN: f32 = 20.0;
    pub const PADDLE_SIZE_DEFAULT: f32 = 40.0;
    pub const PADDLE_SIZE_MAX: f32 = 60.0;

    pub const MOUSE_WHEEL_SENSITIVITY_MIN: f32 = 1.0;
    pub const MOUSE_WHEEL_SENSITIVITY_DEFAULT: f32 = 5.0;
    pub const MOUSE_WHEEL_SENSITIVITY_MAX: f32 = 20.0;

    pub const WINNING_SCORE_MIN: u32 = 5;
    pub const WINNING_SCORE_DEFAULT: u32 = 10;
    pub const WINNING_SCORE_MAX: u32 = 100;

    /// Copy with every field clamped into its valid range
    ///
    /// Non-finite float fields fall back to their defaults.
    pub fn sanitized(self) -> Self {
        let clamp_f32 = |value: f32, min: f32, max: f32, default: f32| {
            if value.is_finite() {
                value.clamp(min, max)
            } else {
                default
            }
        };
        Self {
            ai_skill: self.ai_skill.clamp(Self::AI_SKILL_MIN, Self::AI_SKILL_MAX),
            paddle_size: clamp_f32(
                self.paddle_size,
                Self::PADDLE_SIZE_MIN,
                Self::PADDLE_SIZE_MAX,
                Self::PADDLE_SIZE_DEFAULT,
            ),
            mouse_wheel_sensitivity: clamp_f32(
                self.mouse_wheel_sensitivity,
                Self::MOUSE_WHEEL_SENSITIVITY_MIN,
                Self::MOUSE_WHEEL_SENSITIVITY_MAX,
                Self::MOUSE_WHEEL_SENSITIVITY_DEFAULT,
            ),
            winning_score: self
                .winning_score
                .clamp(Self::WINNING_SCORE_MIN, Self::WINNING_SCORE_MAX),
        }
    }

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Load settings, falling back to defaults if the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {e})",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }

    /// AI aim spread for this skill level
    ///
    /// Scaled so that `ai_skill` percent of aim errors still land within half a
    /// paddle plus the puck radius of the target.
    pub fn ai_spread(&self, puck_radius: f32) -> f32 {
        (self.paddle_size / 2.0 + puck_radius) / z_score(self.ai_skill as usize)
    }

    /// Human paddle velocity for a frame's mouse wheel movement
    pub fn human_paddle_speed(&self, wheel_delta: f32, frame_dt: f32) -> f32 {
        if frame_dt <= 0.0 {
            return 0.0;
        }
        wheel_delta * self.mouse_wheel_sensitivity / frame_dt
    }
}
