use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn evops_help_works() {
    Command::cargo_bin("evops")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("event operations"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["list", "tasks", "summary"];

    for cmd in subcommands {
        Command::cargo_bin("evops")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}

#[test]
fn missing_snapshot_is_a_user_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("evops")
        .expect("binary")
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Event snapshot not found"));
}
