//! HTTP client for the tracktor remote store.
//!
//! - [`TracktorApi`] -- `reqwest`-backed client wrapping every endpoint
//!   of the remote JSON API.
//! - [`ProductionService`] -- the async trait seam the engine and
//!   controllers depend on, so they can be exercised against an
//!   in-process fake.
//! - [`RemoteError`] -- transport / rejection / not-found taxonomy.

pub mod api;
pub mod error;
pub mod service;

pub use api::TracktorApi;
pub use error::RemoteError;
pub use service::ProductionService;
