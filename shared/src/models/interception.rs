//! Interception and desensitization wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whitelist entry: an approved transfer exempt from interception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub approval_id: i64,
    pub scenario_id: Option<i64>,
    pub scenario_name: Option<String>,
    #[serde(default)]
    pub asset_ids: Vec<i64>,
    pub added_at: Option<DateTime<Utc>>,
}

/// Blacklist entry: an asset barred from any transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub asset_id: i64,
    pub asset_name: Option<String>,
    pub asset_code: Option<String>,
    pub data_level: Option<String>,
    pub reason: Option<String>,
    pub added_at: Option<DateTime<Utc>>,
}

/// Interception check request (`POST /interception/check`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptionCheckRequest {
    pub approval_id: Option<i64>,
    pub asset_ids: Vec<i64>,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Interception check verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptionCheckResponse {
    pub allowed: bool,
    pub intercepted: bool,
    pub reason: Option<String>,
    pub desensitized_data: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Desensitization request. The masking rules are server-side; the client
/// only submits raw fields and receives masked ones back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesensitizationRequest {
    pub data: serde_json::Map<String, serde_json::Value>,
    pub asset_ids: Option<Vec<i64>>,
}

/// Desensitization response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesensitizationResponse {
    pub desensitized_data: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub applied_rules: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_response_deserializes_interception_verdict() {
        let json = r#"{
            "allowed": false, "intercepted": true,
            "reason": "数据资产在黑名单中", "desensitized_data": null
        }"#;
        let verdict: InterceptionCheckResponse = serde_json::from_str(json).unwrap();
        assert!(verdict.intercepted);
        assert!(!verdict.allowed);
    }
}
