use super::ProbeSettings;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

impl ProbeSettings {
    /// Load settings from `path`, or defaults when no path is given.
    ///
    /// A path that was asked for must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded probe settings");
        Ok(settings)
    }
}
