//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `platform.rs`: platform id → managed policy path.
//! - `fetch.rs`: remote policy document download + validation.
//! - `storage.rs`: atomic document write and backups.
//! - `sandbox.rs`: Flatpak detection and read-access override.
//! - `selection.rs`: enabled-group state and document merge.
//! - `install.rs`: the shared write pipeline (backup/write/sandbox).
//! - `settings.rs`: optional TOML settings file.
//! - `output.rs`: JSON/text output helpers and the reporter seam.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod fetch;
pub mod install;
pub mod output;
pub mod platform;
pub mod sandbox;
pub mod selection;
pub mod settings;
pub mod storage;
