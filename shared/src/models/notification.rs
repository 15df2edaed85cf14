//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    #[serde(rename = "审批待办")]
    ApprovalPending,
    #[serde(rename = "阈值预警")]
    ThresholdWarning,
    #[serde(rename = "异常告警")]
    AnomalyAlert,
    #[serde(rename = "系统通知")]
    SystemNotice,
    #[serde(rename = "提醒")]
    Reminder,
}

/// 通知状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationStatus {
    #[serde(rename = "未读")]
    Unread,
    #[serde(rename = "已读")]
    Read,
    #[serde(rename = "已归档")]
    Archived,
}

/// Notification entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub content: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<i64>,
    pub action_url: Option<String>,
    /// 优先级（0-普通，1-重要，2-紧急）
    pub priority: i32,
    pub user_id: i64,
    pub status: NotificationStatus,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationCreate {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[validate(length(min = 1, message = "通知标题不能为空"))]
    pub title: String,
    pub content: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<i64>,
    pub action_url: Option<String>,
    #[validate(range(min = 0, max = 2, message = "优先级需在0-2之间"))]
    pub priority: i32,
    #[validate(range(min = 1, message = "接收用户ID无效"))]
    pub user_id: i64,
}

/// Unread/read breakdown (`GET /notifications/stats`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total: u64,
    pub unread: u64,
    pub read: u64,
    #[serde(default)]
    pub by_type: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_uses_wire_name() {
        let json = r#"{
            "id": 1, "type": "阈值预警", "title": "个人信息数量超限",
            "content": null, "resource_type": null, "resource_id": null,
            "action_url": null, "priority": 2, "user_id": 5,
            "status": "未读", "is_read": false, "read_at": null,
            "created_at": "2026-01-12T08:30:00Z", "updated_at": null
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.notification_type, NotificationType::ThresholdWarning);
        assert_eq!(n.status, NotificationStatus::Unread);
    }

    #[test]
    fn priority_outside_range_fails_validation() {
        let payload = NotificationCreate {
            notification_type: NotificationType::Reminder,
            title: "到期提醒".into(),
            content: None,
            resource_type: None,
            resource_id: None,
            action_url: None,
            priority: 5,
            user_id: 1,
        };
        assert!(payload.validate().is_err());
    }
}
