use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;

use processor_probe::diagnostics::check_fanout;
use processor_probe::runtime::{DeploymentMode, RunId};

use super::probe_harness::Workspace;

#[test]
fn one_link_per_input_file_sharing_one_run_id() {
    let ws = Workspace::with_files(&["a.csv", "b.csv", "c.json"]);
    fs::create_dir(ws.input.join("subdir")).unwrap();
    fs::create_dir_all(&ws.output).unwrap();
    let run_id = RunId::generate();

    let created = check_fanout(&ws.config(DeploymentMode::Unset), true, &run_id);

    assert_eq!(created.len(), 3);
    for name in ["a.csv", "b.csv", "c.json"] {
        let link = ws.output.join(run_id.link_name(OsStr::new(name)));
        let target = fs::read_link(&link).unwrap();
        assert!(target.is_absolute(), "{} is not absolute", target.display());
        assert_eq!(target, fs::canonicalize(ws.input.join(name)).unwrap());
        assert_eq!(
            fs::read_to_string(&link).unwrap(),
            format!("contents of {name}")
        );
    }
    assert!(
        created
            .iter()
            .all(|name| name.starts_with(&format!("{run_id}_")))
    );
}

#[test]
fn parallel_runs_into_shared_output_never_collide() {
    let ws = Workspace::with_files(&["x.dat", "y.dat"]);
    fs::create_dir_all(&ws.output).unwrap();
    let config = ws.config(DeploymentMode::Unset);

    let first = check_fanout(&config, true, &RunId::new("11111111").unwrap());
    let second = check_fanout(&config, true, &RunId::new("22222222").unwrap());

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    let entries: HashSet<_> = fs::read_dir(&ws.output)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 4);
    assert!(entries.contains("11111111_x.dat"));
    assert!(entries.contains("22222222_y.dat"));
}

#[test]
fn links_to_symlinked_inputs_resolve_to_real_file() {
    let ws = Workspace::with_files(&["real.txt"]);
    fs::create_dir_all(&ws.output).unwrap();
    std::os::unix::fs::symlink(ws.input.join("real.txt"), ws.input.join("alias.txt")).unwrap();
    let run_id = RunId::new("abcabcab").unwrap();

    let created = check_fanout(&ws.config(DeploymentMode::Unset), true, &run_id);

    assert_eq!(created, ["abcabcab_alias.txt", "abcabcab_real.txt"]);
    let target = fs::read_link(ws.output.join("abcabcab_alias.txt")).unwrap();
    assert_eq!(target, fs::canonicalize(ws.input.join("real.txt")).unwrap());
}
