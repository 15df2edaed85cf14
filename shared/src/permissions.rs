//! Permission catalog and evaluation.
//!
//! RBAC tokens are `<resource>:<action>` strings; the sentinel `*` grants
//! everything. Evaluation is pure set membership with default-deny: an empty
//! permission list authorizes nothing.

/// Wildcard token held by superusers.
pub const ALL_PERMISSIONS_SENTINEL: &str = "*";

/// 可配置权限列表（按资源分组）
pub const ALL_PERMISSIONS: &[&str] = &[
    // 数据资产
    "data_asset:read",
    "data_asset:write",
    "data_asset:delete",
    "data_asset:scan",
    "data_asset:export",
    // 跨境场景
    "scenario:read",
    "scenario:write",
    "scenario:delete",
    "scenario:approve",
    // 风险评估
    "risk:read",
    "risk:write",
    "risk:calculate",
    // 传输审批
    "approval:read",
    "approval:write",
    "approval:approve",
    "approval:reject",
    // 审计日志
    "audit:read",
    "audit:export",
    // 用户管理
    "user:read",
    "user:write",
    "user:delete",
    // 角色管理
    "role:read",
    "role:write",
    "role:delete",
    "role:assign",
    // 监控仪表盘
    "dashboard:read",
    // 通知与提醒
    "notification:read",
    "notification:write",
    // 系统配置
    "config:read",
    "config:write",
    "config:delete",
];

/// Validate a permission string against the catalog.
pub fn is_valid_permission(permission: &str) -> bool {
    permission == ALL_PERMISSIONS_SENTINEL || ALL_PERMISSIONS.contains(&permission)
}

/// True iff the set grants `permission` (exact match or sentinel).
pub fn has_permission(user_permissions: &[String], permission: &str) -> bool {
    if user_permissions.is_empty() {
        return false;
    }
    if user_permissions.iter().any(|p| p == ALL_PERMISSIONS_SENTINEL) {
        return true;
    }
    user_permissions.iter().any(|p| p == permission)
}

/// True iff the set grants at least one of `permissions`.
pub fn has_any_permission(user_permissions: &[String], permissions: &[&str]) -> bool {
    if user_permissions.is_empty() {
        return false;
    }
    if user_permissions.iter().any(|p| p == ALL_PERMISSIONS_SENTINEL) {
        return true;
    }
    permissions
        .iter()
        .any(|needed| user_permissions.iter().any(|p| p == needed))
}

/// True iff the set grants every one of `permissions`.
pub fn has_all_permissions(user_permissions: &[String], permissions: &[&str]) -> bool {
    if user_permissions.is_empty() {
        return false;
    }
    if user_permissions.iter().any(|p| p == ALL_PERMISSIONS_SENTINEL) {
        return true;
    }
    permissions
        .iter()
        .all(|needed| user_permissions.iter().any(|p| p == needed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sentinel_grants_everything() {
        let superuser = perms(&["*"]);
        assert!(has_permission(&superuser, "data_asset:delete"));
        assert!(has_any_permission(&superuser, &["role:assign", "no:such"]));
        assert!(has_all_permissions(&superuser, &["audit:read", "audit:export"]));
    }

    #[test]
    fn empty_set_denies_everything() {
        let none: Vec<String> = Vec::new();
        assert!(!has_permission(&none, "data_asset:read"));
        assert!(!has_any_permission(&none, &["data_asset:read"]));
        assert!(!has_all_permissions(&none, &[]));
    }

    #[test]
    fn exact_membership_only() {
        let auditor = perms(&["audit:read", "audit:export"]);
        assert!(has_permission(&auditor, "audit:read"));
        assert!(!has_permission(&auditor, "audit:write"));
        assert!(has_any_permission(&auditor, &["audit:read", "user:delete"]));
        assert!(!has_any_permission(&auditor, &["user:read", "user:delete"]));
        assert!(has_all_permissions(&auditor, &["audit:read", "audit:export"]));
        assert!(!has_all_permissions(&auditor, &["audit:read", "user:read"]));
    }

    #[test]
    fn catalog_tokens_are_well_formed() {
        for token in ALL_PERMISSIONS {
            assert!(is_valid_permission(token));
            assert!(token.contains(':'), "malformed token {token}");
        }
        assert!(is_valid_permission("*"));
        assert!(!is_valid_permission("orders:void"));
    }
}
