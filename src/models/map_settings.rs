use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_MAP_ID, DEFAULT_SHEET_URL, DEFAULT_TILES_ROOT, DEFAULT_TILE_ZOOM, MAX_TILE_ZOOM,
    MIN_TILE_ZOOM,
};
use crate::projection::ProjectionKind;

const MAP_SETTINGS_KEY: &str = "rail_map_settings";

/// Viewer settings that persist across visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Tab-separated export of the rail spreadsheet
    pub sheet_url: String,
    pub tiles_root: String,
    pub base_map_id: String,
    pub tile_zoom: i32,
    pub show_base_map: bool,
    pub projection: ProjectionKind,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            tiles_root: DEFAULT_TILES_ROOT.to_string(),
            base_map_id: DEFAULT_BASE_MAP_ID.to_string(),
            tile_zoom: DEFAULT_TILE_ZOOM,
            show_base_map: false,
            projection: ProjectionKind::Real,
        }
    }
}

impl MapSettings {
    /// Parse settings saved by [`MapSettings::to_json`]. Unknown fields are
    /// ignored, missing ones take their default and the tile zoom is clamped
    /// to the supported range.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of settings
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut settings: Self =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse settings: {e}"))?;
        settings.tile_zoom = settings.tile_zoom.clamp(MIN_TILE_ZOOM, MAX_TILE_ZOOM);
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize settings: {e}"))
    }

    /// Load settings from `localStorage`, falling back to defaults
    #[must_use]
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else { return Self::default() };
        let Ok(Some(storage)) = window.local_storage() else { return Self::default() };
        let Ok(Some(json)) = storage.get_item(MAP_SETTINGS_KEY) else { return Self::default() };

        Self::from_json(&json).unwrap_or_else(|e| {
            leptos::logging::warn!("{}", e);
            Self::default()
        })
    }

    /// Save settings to `localStorage`
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or rejects the value
    pub fn save(&self) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window")?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or("localStorage unavailable")?;

        storage
            .set_item(MAP_SETTINGS_KEY, &self.to_json()?)
            .map_err(|e| format!("Failed to save settings: {e:?}"))
    }
}
