//! In-memory entity collections for the tracktor client.
//!
//! - [`models`] -- canonical Project / Shot / Asset / Note / User records;
//!   wire-name normalization happens here, at the serde boundary, and
//!   nowhere else.
//! - [`EntityStore`] -- the single source of truth for the currently
//!   loaded project page, with explicit loading / not-found markers and a
//!   generation counter guarding against stale load completions.
//!
//! This crate performs no I/O; all remote traffic lives upstream.

pub mod models;
pub mod store;

pub use models::{Asset, Note, Project, Shot, User};
pub use store::{EntityStore, Loadable, ProjectData};
