//! Crossgate Client - HTTP client for the data-governance console API
//!
//! One gateway wraps every backend call (bearer decoration, envelope
//! unwrapping, centralized 401 teardown); typed per-entity API surfaces and
//! a generic resource controller sit on top of it.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod gateway;
pub mod session;

pub use client::CrossgateClient;
pub use config::ClientConfig;
pub use controller::{Drilldown, LoadState, ResourceController, ResourceRoutes};
pub use error::{ClientError, ClientResult};
pub use export::{ExportApi, ExportFile, ExportFormat};
pub use gateway::Gateway;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};

// Re-export shared types for convenience
pub use shared::{BatchOutcome, ListQuery, ResourcePage};
