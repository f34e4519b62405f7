#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub policy: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let policy = tmp.path().join("etc/brave/policies/managed/policies.json");

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            policy,
            cargo_home,
            rustup_home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("zerobrave");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Command pointed at the temp policy path with the sandbox step off.
    pub fn cmd_local(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--policy-path")
            .arg(&self.policy)
            .arg("--skip-sandbox");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd_local()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_settings(&self, toml: &str) {
        let dir = self.home.join(".config/zerobrave");
        fs::create_dir_all(&dir).expect("create settings dir");
        fs::write(dir.join("config.toml"), toml).expect("write settings");
    }

    pub fn policy_json(&self) -> Value {
        read_json(&self.policy)
    }
}

pub fn read_json(p: &Path) -> Value {
    let raw = fs::read_to_string(p).expect("read policy file");
    serde_json::from_str(&raw).expect("policy file is json")
}

/// Mock policy host. Keep the runtime alive as long as the server.
pub struct PolicyServer {
    pub server: MockServer,
    _rt: tokio::runtime::Runtime,
}

impl PolicyServer {
    pub fn start(status: u16, body: &str) -> Self {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let body = body.to_string();
        let server = rt.block_on(async move {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/policies.json"))
                .respond_with(ResponseTemplate::new(status).set_body_string(body))
                .mount(&server)
                .await;
            server
        });
        Self { server, _rt: rt }
    }

    pub fn url(&self) -> String {
        format!("{}/policies.json", self.server.uri())
    }
}
