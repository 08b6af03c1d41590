//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the normalized config and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — normalized config, report/output structs.
//! - `constants.rs` — stable constants (file names, comment text).
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem or clock access.

pub mod constants;
pub mod models;
