//! Game tuning configuration
//!
//! The defaults are the compiled-in values of the original game. On wasm a
//! config saved to LocalStorage overrides them; anything unreadable falls
//! back to defaults.

use serde::{Deserialize, Serialize};

/// Game tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Row assignment for each enemy in the fixed pool, top rows first
    pub enemy_rows: Vec<i32>,

    /// Enemy speed range in pixels/sec, sampled uniformly on [min, max)
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,

    /// Off-screen spawn offset range in pixels, sampled uniformly on [min, max)
    pub spawn_offset_min: f32,
    pub spawn_offset_max: f32,

    /// How long the player stays locked after a defeat or a victory, seconds
    pub lock_duration: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_rows: vec![3, 3, 2, 2, 2, 1, 1],
            enemy_speed_min: 50.0,
            enemy_speed_max: 400.0,
            spawn_offset_min: -400.0,
            spawn_offset_max: -100.0,
            lock_duration: 0.5,
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "grid_hopper_config";

    /// A config is usable only if both sampling ranges are non-empty and the
    /// lock duration is non-negative. An empty range would panic in
    /// `random_range` the first time an enemy spawns.
    pub fn is_valid(&self) -> bool {
        self.enemy_speed_min < self.enemy_speed_max
            && self.spawn_offset_min < self.spawn_offset_max
            && self.lock_duration >= 0.0
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<GameConfig>(&json) {
                    Ok(config) if config.is_valid() => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Ok(_) => log::warn!("Stored config has unusable ranges, using defaults"),
                    Err(_) => log::warn!("Stored config is not valid JSON, using defaults"),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
