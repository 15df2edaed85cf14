//! Transfer approval model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 审批状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[serde(rename = "待审批")]
    Pending,
    #[serde(rename = "已批准")]
    Approved,
    #[serde(rename = "已拒绝")]
    Rejected,
    #[serde(rename = "已取消")]
    Cancelled,
}

/// Transfer approval entity (one concrete transfer under a scenario).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferApproval {
    pub id: i64,
    pub scenario_id: i64,
    pub transfer_type: Option<String>,
    /// 涉及的数据资产ID列表
    #[serde(default)]
    pub data_assets: Option<Vec<i64>>,
    pub approval_status: ApprovalStatus,
    pub applicant_id: i64,
    pub approver_id: Option<i64>,
    pub transfer_start_time: Option<DateTime<Utc>>,
    pub transfer_end_time: Option<DateTime<Utc>>,
    pub actual_volume: Option<Decimal>,
    pub approval_comment: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransferApprovalCreate {
    #[validate(range(min = 1, message = "场景ID无效"))]
    pub scenario_id: i64,
    pub transfer_type: Option<String>,
    pub data_assets: Option<Vec<i64>>,
    #[validate(range(min = 1, message = "申请人ID无效"))]
    pub applicant_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_wire_strings() {
        let status: ApprovalStatus = serde_json::from_str(r#""已取消""#).unwrap();
        assert_eq!(status, ApprovalStatus::Cancelled);
    }

    #[test]
    fn create_requires_positive_ids() {
        let payload = TransferApprovalCreate {
            scenario_id: 0,
            transfer_type: None,
            data_assets: None,
            applicant_id: 3,
        };
        assert!(payload.validate().is_err());
    }
}
