//! Symlink fan-out for merge-step verification.
//!
//! Every input file gets a link `{run_id}_{name}` in the output directory,
//! pointing at the file's resolved absolute path. Parallel runs feeding one
//! merge directory are kept apart by the run id alone; there is no locking.

use crate::config::RunConfiguration;
use crate::runtime::RunId;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// A directory entry selected for linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: OsString,
    pub path: PathBuf,
}

/// Create one symlink per input file. Returns the names of the links created.
pub fn check_fanout(
    config: &RunConfiguration,
    input_accessible: bool,
    run_id: &RunId,
) -> Vec<String> {
    info!("=== TEST: Symlink Creation ===");

    if !input_accessible {
        error!("  INPUT_DIR does not exist, skipping symlinks");
        return Vec::new();
    }

    let files = match list_source_files(Path::new(&config.input_dir)) {
        Ok(files) => files,
        Err(e) => {
            error!(path = %config.input_dir, error = %e, "  Failed to list INPUT_DIR: {e}");
            return Vec::new();
        }
    };
    if files.is_empty() {
        warn!("  No files found in INPUT_DIR");
        return Vec::new();
    }
    info!(count = files.len(), "  Found {} file(s) in INPUT_DIR", files.len());

    let output_dir = Path::new(&config.output_dir);
    let mut created = Vec::with_capacity(files.len());
    for file in &files {
        let link_name = run_id.link_name(&file.name);
        let display_name = link_name.to_string_lossy().into_owned();
        let target = resolve_target(&file.path);

        match create_symlink(&target, &output_dir.join(&link_name)) {
            Ok(()) => {
                info!(
                    link = %display_name,
                    target = %target.display(),
                    "  Created: {display_name} -> {}",
                    target.display()
                );
                created.push(display_name);
            }
            Err(e) => {
                error!(link = %display_name, error = %e, "  Failed to create symlink {display_name}: {e}");
            }
        }
    }
    created
}

/// Regular files and symlinks (dangling included) directly inside `dir`,
/// sorted by name. Subdirectories are skipped, and so is any entry that
/// cannot be read.
pub fn list_source_files(dir: &Path) -> io::Result<Vec<SourceFile>> {
    let mut files: Vec<SourceFile> = fs::read_dir(dir)?.filter_map(source_file).collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

fn source_file(entry: io::Result<fs::DirEntry>) -> Option<SourceFile> {
    let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
            warn!(error = %e, "  Skipping unreadable INPUT_DIR entry: {e}");
            return None;
        }
    };
    let file_type = match entry.file_type() {
        Ok(file_type) => file_type,
        Err(e) => {
            warn!(path = %entry.path().display(), error = %e, "  Skipping {}: {e}", entry.path().display());
            return None;
        }
    };
    (file_type.is_file() || file_type.is_symlink()).then(|| SourceFile {
        name: entry.file_name(),
        path: entry.path(),
    })
}

/// Fully resolved real path; a dangling link resolves to its own absolute path.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlink fan-out requires a unix host",
    ))
}
