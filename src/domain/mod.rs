//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `catalog.rs`: the static policy group catalog and platform path table.
//! - `models.rs`: selection state, settings, report/output structs.
//! - `errors.rs`: the domain error enum.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs. Keep schema-impacting
//! changes explicit.

pub mod catalog;
pub mod errors;
pub mod models;
