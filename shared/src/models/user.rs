//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    /// 角色列表（仅名称/ID，结构由后端决定）
    #[serde(default)]
    pub roles: Option<Vec<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Identity returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Login response (`POST /auth/login`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(length(min = 1, message = "用户名不能为空"))]
    pub username: String,
    #[validate(email(message = "邮箱格式无效"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[validate(length(min = 6, message = "密码至少6位"))]
    pub password: String,
}

/// Update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(email(message = "邮箱格式无效"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[validate(length(min = 6, message = "密码至少6位"))]
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_validates_email_and_password() {
        let payload = UserCreate {
            username: "zhangsan".into(),
            email: Some("not-an-email".into()),
            full_name: None,
            password: "secret123".into(),
        };
        assert!(payload.validate().is_err());

        let payload = UserCreate {
            email: Some("zhangsan@example.com".into()),
            password: "123".into(),
            ..payload
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn token_defaults_bearer_type() {
        let token: Token = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }
}
