//! Risk assessment model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 风险等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "低风险")]
    Low,
    #[serde(rename = "中风险")]
    Medium,
    #[serde(rename = "高风险")]
    High,
    #[serde(rename = "极高风险")]
    Critical,
}

/// 评估状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    #[serde(rename = "草稿")]
    Draft,
    #[serde(rename = "进行中")]
    InProgress,
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "已归档")]
    Archived,
}

/// Risk assessment entity. Scoring is backend-owned (`calculate` action);
/// the client never derives scores locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: i64,
    pub assessment_name: String,
    pub assessment_code: String,
    pub assessment_type: String,
    pub scenario_id: i64,
    pub legal_environment_score: Option<Decimal>,
    pub data_volume_score: Option<Decimal>,
    pub security_measures_score: Option<Decimal>,
    pub data_sensitivity_score: Option<Decimal>,
    pub personal_info_count: Option<Decimal>,
    pub sensitive_info_count: Option<Decimal>,
    pub exceeds_personal_threshold: bool,
    pub exceeds_sensitive_threshold: bool,
    pub overall_risk_level: Option<RiskLevel>,
    pub overall_score: Option<Decimal>,
    pub risk_factors: Option<serde_json::Value>,
    pub mitigation_measures: Option<String>,
    pub assessment_result: Option<String>,
    pub requires_regulatory_approval: bool,
    pub recommendation: Option<String>,
    pub status: AssessmentStatus,
    pub assessor_id: Option<i64>,
    pub reviewed_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RiskAssessmentCreate {
    #[validate(length(min = 1, message = "评估名称不能为空"))]
    pub assessment_name: String,
    #[validate(length(min = 1, message = "评估编码不能为空"))]
    pub assessment_code: String,
    /// 评估类型，默认 PIA
    #[serde(default = "default_assessment_type")]
    pub assessment_type: String,
    #[validate(range(min = 1, message = "关联场景ID无效"))]
    pub scenario_id: i64,
    pub assessor_id: Option<i64>,
}

fn default_assessment_type() -> String {
    "PIA".to_string()
}

/// Update payload: dimension scores entered by the assessor, 0-100 each.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RiskAssessmentUpdate {
    #[validate(range(min = 0.0, max = 100.0, message = "评分需在0-100之间"))]
    pub legal_environment_score: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "评分需在0-100之间"))]
    pub data_volume_score: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "评分需在0-100之间"))]
    pub security_measures_score: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "评分需在0-100之间"))]
    pub data_sensitivity_score: Option<f64>,
    pub personal_info_count: Option<f64>,
    pub sensitive_info_count: Option<f64>,
    pub mitigation_measures: Option<String>,
    pub assessment_result: Option<String>,
    pub recommendation: Option<String>,
}

/// One warning from a threshold check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdWarning {
    #[serde(rename = "type")]
    pub warning_type: String,
    pub message: String,
    pub level: String,
}

/// Threshold check result for an assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdCheck {
    #[serde(default)]
    pub exceeds_personal_threshold: bool,
    #[serde(default)]
    pub exceeds_sensitive_threshold: bool,
    #[serde(default)]
    pub warnings: Vec<ThresholdWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_round_trips_wire_strings() {
        let level: RiskLevel = serde_json::from_str(r#""极高风险""#).unwrap();
        assert_eq!(level, RiskLevel::Critical);
    }

    #[test]
    fn score_out_of_range_fails_validation() {
        let update = RiskAssessmentUpdate {
            legal_environment_score: Some(120.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let ok = RiskAssessmentUpdate {
            legal_environment_score: Some(85.0),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn threshold_check_tolerates_missing_fields() {
        let check: ThresholdCheck = serde_json::from_str("{}").unwrap();
        assert!(check.warnings.is_empty());
    }
}
