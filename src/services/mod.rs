//! Service layer containing the document logic and side-effect helpers.
//!
//! ## Service map
//! - `normalize.rs` — raw flag values → normalized config (pure).
//! - `builder.rs` — validation, contact canonicalization, serialization (pure).
//! - `expires.rs` — shorthand/literal expiration resolution (clock access).
//! - `writer.rs` — `.well-known/security.txt` creation.
//! - `artifact.rs` — injected artifact sink + directory-copy implementation.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod artifact;
pub mod builder;
pub mod expires;
pub mod normalize;
pub mod output;
pub mod writer;
