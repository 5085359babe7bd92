use std::fmt;

/// Environment variable the serverless platform sets inside a function sandbox.
pub const SERVERLESS_MARKER_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// Where the probe is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Container task or local shell.
    #[default]
    Container,
    /// Serverless function sandbox.
    Serverless,
}

impl ExecutionMode {
    /// Detect the mode from the serverless marker variable.
    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(SERVERLESS_MARKER_VAR) {
            Some(value) if !value.is_empty() => Self::Serverless,
            _ => Self::Container,
        }
    }

    pub fn from_process_env() -> Self {
        Self::detect(|key| std::env::var(key).ok())
    }

    pub fn is_serverless(self) -> bool {
        matches!(self, Self::Serverless)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Container => "ECS/Local",
            Self::Serverless => "Lambda",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
