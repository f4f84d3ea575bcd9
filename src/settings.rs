//! Application Settings
//!
//! Window and frame-rate settings are kept in `config/settings.json`, which is
//! compiled into the binary. Nothing is read from disk at runtime.

use crate::error::AppError;
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SETTINGS: &str = include_str!("../config/settings.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub frames_per_second: u32,
    /// RGB triple used to clear the window every frame
    pub background_color: [u8; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window_title: "animosity".to_string(),
            window_width: 1280,
            window_height: 720,
            frames_per_second: 30,
            background_color: [0, 0, 0],
        }
    }
}

impl Settings {
    /// Loads the settings bundled with the binary
    pub fn load() -> Result<Self, AppError> {
        Self::from_json(DEFAULT_SETTINGS)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| AppError::init(format!("Failed to parse settings: {}", e)))?;

        if settings.frames_per_second == 0 {
            return Err(AppError::init("frames_per_second must be at least 1"));
        }

        Ok(settings)
    }

    pub fn background(&self) -> Color {
        let [r, g, b] = self.background_color;
        Color::RGB(r, g, b)
    }

    /// Wall-clock budget of a single frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second
    }
}
