//! Cross-border transfer scenario model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 场景状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioStatus {
    #[serde(rename = "草稿")]
    Draft,
    #[serde(rename = "待审批")]
    Pending,
    #[serde(rename = "已批准")]
    Approved,
    #[serde(rename = "已拒绝")]
    Rejected,
    #[serde(rename = "已过期")]
    Expired,
    #[serde(rename = "已暂停")]
    Suspended,
}

/// Cross-border scenario entity.
///
/// Status transitions (submit, approve, reject) are backend-owned; the
/// client only requests them and refetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: i64,
    pub scenario_name: String,
    pub scenario_code: String,
    pub business_type: Option<String>,
    pub recipient_name: String,
    pub recipient_country: String,
    pub recipient_type: Option<String>,
    pub data_purpose: String,
    /// 存储期限（天）
    pub storage_duration: Option<i64>,
    pub transfer_frequency: Option<String>,
    pub security_level: Option<String>,
    pub encryption_method: Option<String>,
    pub data_scope: Option<String>,
    pub estimated_volume: Option<Decimal>,
    pub description: Option<String>,
    pub status: ScenarioStatus,
    pub approver_id: Option<i64>,
    pub approved_at: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScenarioCreate {
    #[validate(length(min = 1, message = "场景名称不能为空"))]
    pub scenario_name: String,
    #[validate(length(min = 1, message = "场景编码不能为空"))]
    pub scenario_code: String,
    pub business_type: Option<String>,
    #[validate(length(min = 1, message = "接收方名称不能为空"))]
    pub recipient_name: String,
    #[validate(length(min = 1, message = "接收方所在国不能为空"))]
    pub recipient_country: String,
    pub recipient_type: Option<String>,
    #[validate(length(min = 1, message = "数据用途不能为空"))]
    pub data_purpose: String,
    #[validate(range(min = 1, message = "存储期限必须为正数"))]
    pub storage_duration: Option<i64>,
    pub transfer_frequency: Option<String>,
    pub security_level: Option<String>,
    pub encryption_method: Option<String>,
    pub data_scope: Option<String>,
    pub estimated_volume: Option<Decimal>,
    pub description: Option<String>,
    pub created_by: i64,
}

/// Update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ScenarioUpdate {
    #[validate(length(min = 1, message = "场景名称不能为空"))]
    pub scenario_name: Option<String>,
    pub business_type: Option<String>,
    pub data_purpose: Option<String>,
    #[validate(range(min = 1, message = "存储期限必须为正数"))]
    pub storage_duration: Option<i64>,
    pub transfer_frequency: Option<String>,
    pub security_level: Option<String>,
    pub encryption_method: Option<String>,
    pub data_scope: Option<String>,
    pub estimated_volume: Option<Decimal>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_strings() {
        let status: ScenarioStatus = serde_json::from_str(r#""待审批""#).unwrap();
        assert_eq!(status, ScenarioStatus::Pending);
        assert_eq!(
            serde_json::to_string(&ScenarioStatus::Suspended).unwrap(),
            r#""已暂停""#
        );
    }

    #[test]
    fn create_rejects_blank_recipient() {
        let payload = ScenarioCreate {
            scenario_name: "客户数据出境".into(),
            scenario_code: "SC-001".into(),
            business_type: None,
            recipient_name: "  ".into(),
            recipient_country: "Singapore".into(),
            recipient_type: None,
            data_purpose: "风控建模".into(),
            storage_duration: Some(180),
            transfer_frequency: None,
            security_level: None,
            encryption_method: None,
            data_scope: None,
            estimated_volume: None,
            description: None,
            created_by: 1,
        };
        // whitespace-only still has length > 0; trimming happens at the
        // action layer where the rule is mandatory (rejection reasons)
        assert!(payload.validate().is_ok());

        let blank = ScenarioCreate {
            recipient_name: String::new(),
            ..payload
        };
        assert!(blank.validate().is_err());
    }
}
