//! Role model (RBAC 角色)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role entity carrying its permission strings
/// (e.g. `["*"]` or `["data_asset:read", "scenario:approve"]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleCreate {
    #[validate(length(min = 1, message = "角色名称不能为空"))]
    pub name: String,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
}

/// Update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RoleUpdate {
    #[validate(length(min = 1, message = "角色名称不能为空"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
}

/// Assignment payload (`POST /roles/assign`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserRoleAssign {
    #[validate(range(min = 1, message = "用户ID无效"))]
    pub user_id: i64,
    #[validate(length(min = 1, message = "至少选择一个角色"))]
    pub role_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_requires_at_least_one_role() {
        let payload = UserRoleAssign {
            user_id: 7,
            role_ids: vec![],
        };
        assert!(payload.validate().is_err());
    }
}
