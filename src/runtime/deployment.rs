use super::ExecutionMode;
use std::fmt;

/// Declared network-isolation policy of the execution environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    /// No mode configured; reachability is probed but not asserted.
    #[default]
    Unset,
    /// Public subnets with direct internet access.
    Basic,
    /// Private subnets behind a NAT gateway.
    Secure,
    /// Private subnets with no outbound path.
    Compliant,
    /// A label this build does not know. Treated like `secure`.
    Other(String),
}

impl DeploymentMode {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Self::Unset,
            "basic" => Self::Basic,
            "secure" => Self::Secure,
            "compliant" => Self::Compliant,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Basic => "basic",
            Self::Secure => "secure",
            Self::Compliant => "compliant",
            Self::Other(label) => label,
        }
    }

    /// Whether outbound internet should work under this mode.
    ///
    /// `None` for an unset mode. A serverless sandbox in `basic` mode sits in
    /// the VPC without a public IP or NAT, so it has no outbound path.
    pub fn expects_internet(&self, execution: ExecutionMode) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Compliant => Some(false),
            Self::Basic if execution.is_serverless() => Some(false),
            Self::Basic | Self::Secure | Self::Other(_) => Some(true),
        }
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            f.write_str(self.as_str())
        } else {
            f.write_str("(not set)")
        }
    }
}
