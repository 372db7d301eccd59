//! Code-action resolution for web app manifests.
//!
//! This crate owns *which* fix a diagnostic maps to and *what* text edit
//! expresses it. It never applies edits; that's the host's job (or the
//! `manifix-edit` crate when running from the CLI).

mod doc;
mod interpret;
mod locate;
mod provider;
mod synth;

pub use doc::{DocumentLines, InMemoryDocument};
pub use interpret::{FixMode, interpret};
pub use locate::locate_value_range;
pub use provider::{CodeActionProvider, FixContext};
pub use synth::{INSERT_ANCHOR, insert_edit, replace_edit};
