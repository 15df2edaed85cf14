//! Batch operations API
//!
//! Bulk approve/reject/delete over a multi-selection. The backend processes
//! ids one by one and reports success and error counts; partial success is
//! a completed operation, and both counts must reach the user.

use super::require_reason;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use serde::Serialize;
use shared::response::BatchOutcome;

#[derive(Debug, Serialize)]
struct ScenarioBatch<'a> {
    scenario_ids: &'a [i64],
    approver_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ApprovalBatch<'a> {
    approval_ids: &'a [i64],
    approver_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct AssetBatch<'a> {
    asset_ids: &'a [i64],
}

/// `/batch` surface.
#[derive(Debug, Clone)]
pub struct BatchApi {
    gateway: Gateway,
}

impl BatchApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    fn require_selection(ids: &[i64]) -> ClientResult<()> {
        if ids.is_empty() {
            return Err(ClientError::Validation("未选择任何记录".to_string()));
        }
        Ok(())
    }

    pub async fn approve_scenarios(
        &self,
        scenario_ids: &[i64],
        approver_id: i64,
        comment: Option<&str>,
    ) -> ClientResult<BatchOutcome> {
        Self::require_selection(scenario_ids)?;
        let body = ScenarioBatch {
            scenario_ids,
            approver_id,
            comment,
            reason: None,
        };
        self.gateway.post("/batch/scenarios/approve", &body).await
    }

    /// Shared rejection reason is mandatory, checked before dispatch.
    pub async fn reject_scenarios(
        &self,
        scenario_ids: &[i64],
        approver_id: i64,
        reason: &str,
    ) -> ClientResult<BatchOutcome> {
        Self::require_selection(scenario_ids)?;
        let reason = require_reason(reason)?;
        let body = ScenarioBatch {
            scenario_ids,
            approver_id,
            comment: None,
            reason: Some(reason),
        };
        self.gateway.post("/batch/scenarios/reject", &body).await
    }

    pub async fn approve_transfers(
        &self,
        approval_ids: &[i64],
        approver_id: i64,
        comment: Option<&str>,
    ) -> ClientResult<BatchOutcome> {
        Self::require_selection(approval_ids)?;
        let body = ApprovalBatch {
            approval_ids,
            approver_id,
            comment,
            reason: None,
        };
        self.gateway.post("/batch/approvals/approve", &body).await
    }

    pub async fn reject_transfers(
        &self,
        approval_ids: &[i64],
        approver_id: i64,
        reason: &str,
    ) -> ClientResult<BatchOutcome> {
        Self::require_selection(approval_ids)?;
        let reason = require_reason(reason)?;
        let body = ApprovalBatch {
            approval_ids,
            approver_id,
            comment: None,
            reason: Some(reason),
        };
        self.gateway.post("/batch/approvals/reject", &body).await
    }

    pub async fn delete_data_assets(&self, asset_ids: &[i64]) -> ClientResult<BatchOutcome> {
        Self::require_selection(asset_ids)?;
        let body = AssetBatch { asset_ids };
        self.gateway.post("/batch/data-assets/delete", &body).await
    }
}
