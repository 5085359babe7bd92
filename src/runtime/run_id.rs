use crate::error::ConfigError;
use std::ffi::{OsStr, OsString};
use std::fmt;

const RUN_ID_LEN: usize = 8;

/// Short random token that namespaces one run's output artifacts.
///
/// Generated once at process start and passed explicitly to the fan-out
/// check, so parallel runs writing into a shared merge directory never pick the
/// same symlink name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    pub fn generate() -> Self {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        Self(hex[..RUN_ID_LEN].to_string())
    }

    /// Fixed identifier, for reproducible runs and tests.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::RunId("run id cannot be empty".into()));
        }
        if value.contains(['/', '\\']) || value == "." || value == ".." {
            return Err(ConfigError::RunId(format!(
                "run id '{value}' must be a single path component"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the symlink this run creates for `file_name`.
    pub fn link_name(&self, file_name: &OsStr) -> OsString {
        let mut name = OsString::from(format!("{}_", self.0));
        name.push(file_name);
        name
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
