//! Typed API surfaces, one module per business entity.
//!
//! Each is a thin wrapper over the gateway with the entity's paths (trailing
//! slashes match the backend exactly) and the client-side rules that must
//! hold before a call leaves the process (mandatory rejection reasons, typed
//! config values).

pub mod approvals;
pub mod audit;
pub mod auth;
pub mod batch;
pub mod dashboard;
pub mod data_assets;
pub mod interception;
pub mod notifications;
pub mod risk;
pub mod roles;
pub mod scenarios;
pub mod system_config;
pub mod users;

pub use approvals::ApprovalsApi;
pub use audit::AuditApi;
pub use auth::AuthApi;
pub use batch::BatchApi;
pub use dashboard::{DashboardApi, DashboardSnapshot};
pub use data_assets::DataAssetsApi;
pub use interception::InterceptionApi;
pub use notifications::NotificationsApi;
pub use risk::RiskApi;
pub use roles::RolesApi;
pub use scenarios::ScenariosApi;
pub use system_config::SystemConfigApi;
pub use users::UsersApi;

use crate::error::{ClientError, ClientResult};

/// Rejection reasons are mandatory: a blank reason must not issue any
/// network call.
pub(crate) fn require_reason(reason: &str) -> ClientResult<&str> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("拒绝原因不能为空".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reasons_are_rejected() {
        assert!(require_reason("").is_err());
        assert!(require_reason("   ").is_err());
        assert_eq!(require_reason(" 资料不全 ").unwrap(), "资料不全");
    }
}
