pub mod api;
pub mod directories;
pub mod env_vars;
pub mod fanout;
pub mod network;

pub use api::{ApiCheck, check_authenticated_api};
pub use directories::{DirectoryReport, check_directories};
pub use env_vars::{EnvReport, check_env_vars};
pub use fanout::check_fanout;
pub use network::{NetworkReport, check_network};

use std::fmt;

/// Status tag printed in front of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckStatus {
    pub fn from_ok(ok: bool) -> Self {
        if ok { Self::Pass } else { Self::Fail }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
