//! Blockfall (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package re-exports them as
//! `blockfall::{core, types}` and adds the headless host used by the `blockfall` binary:
//! a line-based command script runner that reports every step as a JSON line.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod observe;
pub mod script;
