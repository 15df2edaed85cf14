//! System configuration model and typed value validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// 配置分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigCategory {
    #[serde(rename = "阈值配置")]
    Threshold,
    #[serde(rename = "脱敏规则")]
    Desensitization,
    #[serde(rename = "审批流程")]
    Approval,
    #[serde(rename = "通知设置")]
    Notification,
    #[serde(rename = "系统设置")]
    System,
    #[serde(rename = "合规规则")]
    Compliance,
}

/// 配置值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    String,
    Integer,
    Float,
    Boolean,
    Json,
}

/// System configuration entry. Values are stored as strings and validated
/// against `config_type` before any update is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub id: i64,
    pub config_key: String,
    pub config_name: String,
    pub config_value: String,
    pub config_type: ConfigType,
    pub category: ConfigCategory,
    pub description: Option<String>,
    pub is_encrypted: bool,
    pub is_editable: bool,
    pub is_public: bool,
    pub validation_rule: Option<String>,
    pub default_value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i64>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SystemConfigCreate {
    #[validate(length(min = 1, message = "配置键不能为空"))]
    pub config_key: String,
    #[validate(length(min = 1, message = "配置名称不能为空"))]
    pub config_name: String,
    pub config_value: String,
    pub config_type: ConfigType,
    pub category: ConfigCategory,
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// Update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SystemConfigUpdate {
    #[validate(length(min = 1, message = "配置名称不能为空"))]
    pub config_name: Option<String>,
    pub config_value: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// Rejection reason from [`validate_config_value`].
#[derive(Debug, Error)]
pub enum ConfigValueError {
    #[error("值 '{0}' 不是合法的整数")]
    NotAnInteger(String),
    #[error("值 '{0}' 不是合法的数字")]
    NotAFloat(String),
    #[error("值 '{0}' 不是合法的布尔值 (true/false)")]
    NotABoolean(String),
    #[error("值不是合法的JSON: {0}")]
    NotJson(String),
}

/// Check a raw value string against the entry's declared type.
///
/// Runs before any `PUT` is issued; a failure blocks the call entirely.
pub fn validate_config_value(config_type: ConfigType, value: &str) -> Result<(), ConfigValueError> {
    match config_type {
        ConfigType::String => Ok(()),
        ConfigType::Integer => value
            .trim()
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| ConfigValueError::NotAnInteger(value.to_string())),
        ConfigType::Float => value
            .trim()
            .parse::<f64>()
            .map(|_| ())
            .map_err(|_| ConfigValueError::NotAFloat(value.to_string())),
        ConfigType::Boolean => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "false" => Ok(()),
            _ => Err(ConfigValueError::NotABoolean(value.to_string())),
        },
        ConfigType::Json => serde_json::from_str::<serde_json::Value>(value)
            .map(|_| ())
            .map_err(|e| ConfigValueError::NotJson(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_rejects_fractional_input() {
        assert!(validate_config_value(ConfigType::Integer, "12.5").is_err());
        assert!(validate_config_value(ConfigType::Integer, "100000").is_ok());
        assert!(validate_config_value(ConfigType::Integer, " -3 ").is_ok());
    }

    #[test]
    fn float_and_boolean_checks() {
        assert!(validate_config_value(ConfigType::Float, "0.95").is_ok());
        assert!(validate_config_value(ConfigType::Float, "abc").is_err());
        assert!(validate_config_value(ConfigType::Boolean, "True").is_ok());
        assert!(validate_config_value(ConfigType::Boolean, "yes").is_err());
    }

    #[test]
    fn json_must_parse() {
        assert!(validate_config_value(ConfigType::Json, r#"{"mask":"*"}"#).is_ok());
        assert!(validate_config_value(ConfigType::Json, "{mask}").is_err());
        assert!(validate_config_value(ConfigType::String, "anything").is_ok());
    }

    #[test]
    fn config_type_uses_lowercase_wire_names() {
        let ty: ConfigType = serde_json::from_str(r#""integer""#).unwrap();
        assert_eq!(ty, ConfigType::Integer);
    }
}
