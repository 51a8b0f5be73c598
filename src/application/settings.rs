//! Functions for loading game settings.

use std::fs;
use std::path::Path;

use crate::errors::*;

/// A structure containing configuration data for the game engine. Missing fields
/// fall back to their defaults when deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineParams,
    /// Runs without window and video. This is the only mode available right now,
    /// so a value of `false` only gets a warning.
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            engine: EngineParams::default(),
            headless: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// If fps goes lower than this, time will appear to slow. Zero disables it.
    pub min_fps: u32,
    /// The main loop sleeps if fps is higher than this. Zero disables it.
    pub max_fps: u32,
    /// How many frames to average for timestep smoothing.
    pub time_smooth_step: u32,
    /// Stops the main loop after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            min_fps: 0,
            max_fps: 30,
            time_smooth_step: 0,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Parses settings from a json document.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a json file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let settings = Settings::from_json(&fs::read_to_string(path)?)?;
        info!("Settings loaded from {:?}.", path);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let params = &self.engine;
        if params.min_fps > 0 && params.max_fps > 0 && params.min_fps > params.max_fps {
            return Err(Error::InvalidSettings(format!(
                "min_fps ({}) is greater than max_fps ({})",
                params.min_fps, params.max_fps
            )));
        }

        Ok(())
    }
}
