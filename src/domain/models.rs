use crate::domain::catalog::{FLATPAK_APP_ID, SOURCE_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_source_url() -> String {
    SOURCE_URL.to_string()
}

fn default_flatpak_app_id() -> String {
    FLATPAK_APP_ID.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Contents of `~/.config/zerobrave/config.toml`. Every field is optional.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Overrides the per-platform managed policy path.
    #[serde(default)]
    pub policy_path: Option<PathBuf>,
    #[serde(default = "default_flatpak_app_id")]
    pub flatpak_app_id: String,
    #[serde(default)]
    pub backup: bool,
    #[serde(default = "default_true")]
    pub sandbox: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            policy_path: None,
            flatpak_app_id: default_flatpak_app_id(),
            backup: false,
            sandbox: true,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct GroupRow {
    pub index: usize,
    pub id: String,
    pub tag: String,
    pub name: String,
    pub description: String,
    pub policies: usize,
    pub enabled: bool,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSummary {
    pub enabled_groups: usize,
    pub total_groups: usize,
    pub policies: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SandboxOutcome {
    Skipped,
    NotSandboxed,
    Declined,
    Granted,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApplyReport {
    pub path: String,
    pub policies: usize,
    pub dry_run: bool,
    pub backup: Option<String>,
    pub sandbox: SandboxOutcome,
}
