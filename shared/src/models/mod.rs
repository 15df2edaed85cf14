//! Data models
//!
//! Shared between the gateway client and the console binary. Field names and
//! status strings follow the governance backend's wire format; all IDs are
//! `i64`.

pub mod approval;
pub mod audit;
pub mod data_asset;
pub mod interception;
pub mod notification;
pub mod risk;
pub mod role;
pub mod scenario;
pub mod system_config;
pub mod user;

// Re-exports
pub use approval::*;
pub use audit::*;
pub use data_asset::*;
pub use interception::*;
pub use notification::*;
pub use risk::*;
pub use role::*;
pub use scenario::*;
pub use system_config::*;
pub use user::*;
