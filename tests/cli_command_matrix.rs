use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("zerobrave");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    run_help(&home, &[]);
    run_help(&home, &["sync"]);
    run_help(&home, &["menu"]);
    run_help(&home, &["list"]);
    run_help(&home, &["preview"]);
    run_help(&home, &["apply"]);
    run_help(&home, &["path"]);
}
