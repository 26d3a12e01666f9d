use tracing::info;

use crate::errors::DashboardError;
use crate::models::settings::DashboardSettings;

/// Load and save dashboard settings as JSON.
///
/// Settings are validated on the way in and on the way out, so a file
/// written by this store always loads back.
pub struct SettingsStore;

impl SettingsStore {
    /// Serialize settings to pretty-printed JSON bytes.
    pub fn save_to_bytes(settings: &DashboardSettings) -> Result<Vec<u8>, DashboardError> {
        settings.validate()?;
        serde_json::to_vec_pretty(settings)
            .map_err(|e| DashboardError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Parse and validate settings from JSON bytes. Missing fields take defaults.
    pub fn load_from_bytes(data: &[u8]) -> Result<DashboardSettings, DashboardError> {
        let settings: DashboardSettings = serde_json::from_slice(data).map_err(|e| {
            DashboardError::Deserialization(format!("Failed to parse settings: {e}"))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a JSON file on disk.
    pub fn save_to_file(settings: &DashboardSettings, path: &str) -> Result<(), DashboardError> {
        let bytes = Self::save_to_bytes(settings)?;
        std::fs::write(path, bytes)?;
        info!(path, "saved dashboard settings");
        Ok(())
    }

    /// Load settings from a JSON file on disk.
    pub fn load_from_file(path: &str) -> Result<DashboardSettings, DashboardError> {
        let bytes = std::fs::read(path)?;
        let settings = Self::load_from_bytes(&bytes)?;
        info!(path, "loaded dashboard settings");
        Ok(settings)
    }
}
