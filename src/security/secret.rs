use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Marker printed in place of a credential that is present.
pub const REDACTED: &str = "***";
/// Marker printed for a credential that was not supplied.
pub const EMPTY_MARKER: &str = "(empty)";

/// A credential string that never renders its contents.
///
/// `Debug` and `Display` both print [`REDACTED`] or [`EMPTY_MARKER`]; the raw
/// value is only reachable through [`Secret::expose`]. The buffer is wiped on
/// drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw credential, for building an outbound request header or body.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Display form used in every log line.
    pub fn masked(&self) -> &'static str {
        if self.0.is_empty() {
            EMPTY_MARKER
        } else {
            REDACTED
        }
    }

    /// `None` when the credential is empty.
    pub fn non_empty(&self) -> Option<&Self> {
        (!self.is_empty()).then_some(self)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", self.masked())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.masked())
    }
}
