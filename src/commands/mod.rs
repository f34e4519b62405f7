//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs`: sync/apply/preview/list/path and menu startup.
//! - `menu.rs`: the interactive selection state machine.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod menu;
pub mod runtime;

pub use runtime::handle_runtime_commands;
