//! End-to-end runs of the `publish` binary, checking what lands on stdout.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

fn publish(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_publish"))
        .args(args)
        .current_dir(root)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn site(root: &Path, drafts: &[&str]) {
    fs::create_dir_all(root.join("_drafts")).unwrap();
    fs::create_dir_all(root.join("_posts")).unwrap();
    for name in drafts {
        fs::write(root.join("_drafts").join(name), *name).unwrap();
    }
}

/// `YYYY-MM-DD` taken from the post that was written for `segment`.
fn post_date(root: &Path, segment: &str) -> String {
    let suffix = format!("-{segment}");
    let name = fs::read_dir(root.join("_posts"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .find(|n| n.ends_with(&suffix))
        .unwrap();
    let date = name.strip_suffix(&suffix).unwrap().to_string();
    assert_eq!(date.len(), 10, "unexpected post name {name}");
    date
}

#[test]
fn test_no_arguments_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    // never read: an invalid config would fail the run if it were
    fs::write(dir.path().join("publish.toml"), "[paths\n").unwrap();

    let output = publish(dir.path(), &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_stdout_is_one_line_per_argument() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    site(root, &["a.md", "b.md"]);

    let output = publish(root, &["a.md", "dir/b.md"]);
    assert!(output.status.success());

    let date = post_date(root, "a.md");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("mv _drafts/a.md _posts/{date}-a.md\nmv _drafts/b.md _posts/{date}-b.md\n")
    );
    assert!(root.join(format!("_posts/{date}-b.md")).is_file());
}

#[test]
fn test_failed_move_reports_on_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    site(root, &["a.md"]);

    let output = publish(root, &["ghost.md", "dir/a.md"]);
    assert!(output.status.success());

    let date = post_date(root, "a.md");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("mv _drafts/ghost.md _posts/{date}-ghost.md\nmv _drafts/a.md _posts/{date}-a.md\n")
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("_drafts/ghost.md"), "stderr: {stderr}");
    assert!(!stderr.contains('\x1b'), "stderr: {stderr:?}");
}

#[test]
fn test_strict_exits_non_zero_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    site(dir.path(), &[]);

    let output = publish(dir.path(), &["--strict", "ghost.md"]);
    assert!(!output.status.success());
    assert_eq!(output.stdout.iter().filter(|&&b| b == b'\n').count(), 1);
}
