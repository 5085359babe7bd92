use std::fs;
use std::os::unix::fs::PermissionsExt;

use processor_probe::diagnostics::check_directories;
use processor_probe::runtime::DeploymentMode;

use super::probe_harness::Workspace;

#[test]
fn missing_output_is_created_and_writable() {
    let ws = Workspace::with_files(&[]);
    assert!(!ws.output.exists());

    let report = check_directories(&ws.config(DeploymentMode::Unset));

    assert!(report.input_accessible);
    assert!(report.output_writable);
    assert!(ws.output.is_dir());
}

#[test]
fn read_only_output_is_reported_not_writable() {
    let ws = Workspace::with_files(&[]);
    fs::create_dir(&ws.output).unwrap();
    fs::set_permissions(&ws.output, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users bypass permission bits; nothing to assert there.
    if fs::write(ws.output.join("privilege-check"), "x").is_ok() {
        fs::remove_file(ws.output.join("privilege-check")).unwrap();
        fs::set_permissions(&ws.output, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = check_directories(&ws.config(DeploymentMode::Unset));
    fs::set_permissions(&ws.output, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(report.input_accessible);
    assert!(!report.output_writable);
    assert!(!report.is_ok());
}
