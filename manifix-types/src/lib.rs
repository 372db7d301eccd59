//! Shared DTOs for the manifix workspace.
//!
//! # Design constraints
//! - Wire-facing types here are serialized to disk and to packaging services.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod action;
pub mod diagnostic;
pub mod manifest;
pub mod package;
pub mod text;

/// Schema identifiers.
pub mod schema {
    pub const MANIFIX_DIAGNOSTICS_V1: &str = "manifix.diagnostics.v1";
}
