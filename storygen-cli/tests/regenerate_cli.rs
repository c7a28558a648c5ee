use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

use storygen_catalog::STORIES;

fn storygen_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("storygen"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn bare_invocation_writes_every_story_into_cwd() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");

    storygen_cmd(cwd.path())
        .assert()
        .success()
        .stdout("Wrote 16 documents.\n");

    for (path, content) in STORIES {
        let on_disk = fs::read_to_string(cwd.child(path).path()).expect("story written");
        assert_eq!(on_disk, *content, "content mismatch for {path}");
    }
}

#[test]
fn root_flag_redirects_output() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");
    let out = cwd.child("out");

    storygen_cmd(cwd.path())
        .arg("--root")
        .arg(out.path())
        .assert()
        .success()
        .stdout(contains("Wrote 16 documents."));

    out.child("docs/stories").assert(predicate::path::is_dir());
    cwd.child("docs").assert(predicate::path::missing());
}

#[test]
fn dry_run_reports_count_and_writes_nothing() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");

    storygen_cmd(cwd.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout("[dry-run] Would write 16 documents.\n");

    let mut entries = fs::read_dir(cwd.path()).unwrap();
    assert!(entries.next().is_none(), "dry-run must not create files");
}

#[test]
fn rerun_overwrites_local_edits() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");
    let (path, content) = STORIES[0];

    storygen_cmd(cwd.path()).assert().success();
    cwd.child(path).write_str("hand edited\n").unwrap();
    storygen_cmd(cwd.path()).assert().success();

    cwd.child(path).assert(content);
}

#[test]
fn list_prints_every_path_in_order() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");

    let output = storygen_cmd(cwd.path()).arg("list").output().expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let listed: Vec<_> = stdout.lines().collect();
    let expected: Vec<_> = STORIES.iter().map(|(p, _)| *p).collect();
    assert_eq!(listed, expected);
}

#[test]
fn diff_is_clean_after_regeneration_and_shows_edits() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");
    let (path, _) = STORIES[1];

    storygen_cmd(cwd.path()).assert().success();
    storygen_cmd(cwd.path())
        .arg("diff")
        .assert()
        .success()
        .stdout("No differences.\n");

    let target = cwd.child(path);
    let edited = format!("{}\nmanual tweak\n", fs::read_to_string(target.path()).unwrap());
    target.write_str(&edited).unwrap();

    storygen_cmd(cwd.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(contains(format!("--- a/{path}")))
        .stdout(contains(format!("+++ b/{path}")))
        .stdout(contains("-manual tweak"));
}

#[test]
fn diff_honours_root_flag() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");

    storygen_cmd(cwd.path())
        .args(["--root", "site"])
        .assert()
        .success();
    storygen_cmd(cwd.path())
        .args(["diff", "--root", "site"])
        .assert()
        .success()
        .stdout("No differences.\n");
}

#[test]
fn storage_failure_exits_non_zero_without_summary() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");
    // `docs` as a plain file blocks every story directory.
    cwd.child("docs").write_str("in the way").unwrap();

    storygen_cmd(cwd.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("I/O error at"));

    cwd.child("docs").assert("in the way");
}

#[test]
fn flags_before_a_subcommand_are_rejected() {
    let cwd = assert_fs::TempDir::new().expect("tempdir");

    storygen_cmd(cwd.path())
        .args(["--dry-run", "diff"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
    storygen_cmd(cwd.path())
        .args(["--root", "site", "list"])
        .assert()
        .failure();
    storygen_cmd(cwd.path())
        .args(["list", "--root", "site"])
        .assert()
        .failure();

    let mut entries = fs::read_dir(cwd.path()).unwrap();
    assert!(entries.next().is_none(), "rejected invocations must not write");
}
