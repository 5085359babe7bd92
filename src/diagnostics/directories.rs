use crate::config::RunConfiguration;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Marker file written and removed to prove the output directory is writable.
pub const WRITE_PROBE_FILE: &str = ".write_test";

/// Outcome of the directory accessibility check. Either `false` is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryReport {
    pub input_accessible: bool,
    pub output_writable: bool,
}

impl DirectoryReport {
    pub fn is_ok(self) -> bool {
        self.input_accessible && self.output_writable
    }
}

pub fn check_directories(config: &RunConfiguration) -> DirectoryReport {
    info!("=== TEST: Directory Access ===");

    let input_accessible = input_accessible(&config.input_dir);
    info!(
        path = %config.input_dir,
        exists = input_accessible,
        "  INPUT_DIR exists: {input_accessible} ({})",
        config.input_dir
    );

    let output_writable = output_writable(&config.output_dir);

    DirectoryReport {
        input_accessible,
        output_writable,
    }
}

/// The input path exists and is a directory. Never created.
pub fn input_accessible(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}

/// Create the output directory if needed, then prove it is writable.
pub fn output_writable(path: &str) -> bool {
    if path.is_empty() {
        error!("  OUTPUT_DIR is not configured");
        return false;
    }

    let dir = Path::new(path);
    if !dir.exists() {
        match fs::create_dir_all(dir) {
            Ok(()) => info!(path = %dir.display(), "  OUTPUT_DIR created: {}", dir.display()),
            Err(e) => {
                error!(path = %dir.display(), error = %e, "  OUTPUT_DIR create failed: {e}");
                return false;
            }
        }
    }

    match write_probe(dir) {
        Ok(()) => {
            info!("  OUTPUT_DIR writable: true");
            true
        }
        Err(e) => {
            error!(path = %dir.display(), error = %e, "  OUTPUT_DIR writable: false ({e:#})");
            false
        }
    }
}

fn write_probe(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }
    let probe = dir.join(WRITE_PROBE_FILE);
    fs::write(&probe, b"test").with_context(|| format!("write {}", probe.display()))?;
    fs::remove_file(&probe).with_context(|| format!("remove {}", probe.display()))?;
    Ok(())
}
