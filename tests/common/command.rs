use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository on branch `main` with one commit tracking `tracked.txt`.
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/main"],
    )
    .assert()
    .success();
    run_git_command(repository_dir.path(), &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["config", "user.email", "fake_email@email.com"],
    )
    .assert()
    .success();

    repository_dir
        .child("tracked.txt")
        .write_str("one\n")
        .expect("Failed to write tracked.txt");
    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    run_git_command(repository_dir.path(), &["commit", "-m", "Initial commit"])
        .assert()
        .success();

    repository_dir
}

fn hermetic(cmd: &mut Command, dir: &Path) {
    cmd.current_dir(dir);
    cmd.env("HOME", dir);
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    cmd.env("LC_ALL", "C");
    cmd.env("LANG", "C");
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.env_remove("GIT_DIR");
    cmd.env_remove("GIT_WORK_TREE");
}

pub fn run_shortcut(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-shortcuts").expect("Failed to find git-shortcuts binary");
    hermetic(&mut cmd, dir);
    cmd.args(args);
    cmd
}

/// Same as [`run_shortcut`], with ANSI colors forced on although stdout is a pipe.
pub fn run_colored_shortcut(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = run_shortcut(dir, args);
    cmd.env("CLICOLOR_FORCE", "1");
    cmd.env_remove("NO_COLOR");
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    hermetic(&mut cmd, dir);
    cmd.args(args);
    cmd
}

/// Stdout of a git command that is expected to succeed.
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("git printed invalid UTF-8")
}

pub fn git_commit_file(dir: &Path, file: &str, content: &str, message: &str) {
    std::fs::write(dir.join(file), content).expect("Failed to write file");
    run_git_command(dir, &["add", file]).assert().success();
    run_git_command(dir, &["commit", "-m", message])
        .assert()
        .success();
}
