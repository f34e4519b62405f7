mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn list_shows_every_group_in_order() {
    let env = TestEnv::new();
    let out = env.run_json(&["list"]);
    assert_eq!(out["ok"], true);
    let rows = out["data"].as_array().expect("rows");
    let ids: Vec<&str> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["ai", "privacy", "telemetry", "security", "autofill", "sync", "perms", "brave"]
    );
    assert_eq!(rows[2]["policies"], 13);
    assert_eq!(rows[0]["index"], 1);
}

#[test]
fn list_text_is_tab_separated() {
    let env = TestEnv::new();
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2\t[PRIV]\tprivacy\tBlock Tracking"));
}

#[test]
fn preview_merges_enabled_groups() {
    let env = TestEnv::new();
    let out = env.run_json(&["preview", "--disable", "telemetry,perms"]);
    let doc = out["data"].as_object().expect("document");
    assert_eq!(doc.len(), 57 - 13 - 10);
    assert!(doc.get("MetricsReportingEnabled").is_none());
    assert_eq!(doc["WebRtcIPHandling"], "disable_non_proxied_udp");
    assert!(!env.policy.exists());
}

#[test]
fn preview_rejects_unknown_group() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "--disable", "bogus"])
        .assert()
        .failure()
        .stderr(contains("unknown policy group: bogus"));
}

#[test]
fn path_honours_override() {
    let env = TestEnv::new();
    let out = env.run_json(&["path"]);
    assert_eq!(out["data"], env.policy.display().to_string());
}

#[cfg(target_os = "linux")]
#[test]
fn path_on_linux_is_etc_brave() {
    let env = TestEnv::new();
    env.cmd()
        .arg("path")
        .assert()
        .success()
        .stdout(contains("/etc/brave/policies/managed/policies.json"));
}

#[test]
fn malformed_settings_fail_fast() {
    let env = TestEnv::new();
    env.write_settings("sandbox = [");
    env.cmd().arg("list").assert().failure().stderr(contains("invalid settings file"));
}
