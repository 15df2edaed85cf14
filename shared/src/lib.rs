//! Shared wire types for the crossgate console.
//!
//! Everything the gateway client and the console binary exchange with the
//! governance backend lives here: response envelopes, list normalization,
//! the permission catalog, and one model module per business entity.

pub mod models;
pub mod page;
pub mod permissions;
pub mod response;

pub use page::{DEFAULT_PAGE_SIZE, ListPayload, ListQuery, ResourcePage};
pub use response::{BatchOutcome, Envelope, MessageResponse};
