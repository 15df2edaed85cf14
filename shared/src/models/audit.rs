//! Audit log model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    #[serde(rename = "创建")]
    Create,
    #[serde(rename = "更新")]
    Update,
    #[serde(rename = "删除")]
    Delete,
    #[serde(rename = "审批")]
    Approve,
    #[serde(rename = "拒绝")]
    Reject,
    #[serde(rename = "传输")]
    Transfer,
    #[serde(rename = "拦截")]
    Intercept,
    #[serde(rename = "脱敏")]
    Desensitize,
    #[serde(rename = "查看")]
    View,
    #[serde(rename = "导出")]
    Export,
}

/// Audit log entry. Read-only on the client; anomaly detection is
/// backend-owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub action: AuditAction,
    pub resource_type: Option<String>,
    pub resource_id: Option<i64>,
    pub user_id: i64,
    pub username: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub operation_details: Option<serde_json::Value>,
    pub before_data: Option<serde_json::Value>,
    pub after_data: Option<serde_json::Value>,
    pub transfer_volume: Option<Decimal>,
    pub destination_country: Option<String>,
    pub transfer_status: Option<String>,
    pub is_anomaly: bool,
    pub anomaly_type: Option<String>,
    pub anomaly_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
