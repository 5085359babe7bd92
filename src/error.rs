use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Errors that stop a probe run before any check executes.
///
/// Check failures are never surfaced through this type: every check converts
/// its own I/O and network errors into a result plus a log line. This enum only
/// covers the setup surface (settings file, invocation payload) and encoding
/// the serverless response.
#[derive(Debug, Error)]
pub enum ProbeError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Serverless payload ──────────────────────────────────────────────
    #[error("payload: {0}")]
    Payload(#[from] PayloadError),

    // ── Serverless response ─────────────────────────────────────────────
    #[error("failed to encode invocation response: {0}")]
    Encode(#[source] serde_json::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid run id: {0}")]
    RunId(String),
}

// ─── Payload errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read invocation payload: {0}")]
    Read(String),

    #[error("invocation payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ProbeError>;
