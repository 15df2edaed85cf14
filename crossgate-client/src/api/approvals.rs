//! Transfer approvals API

use super::require_reason;
use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{TransferApproval, TransferApprovalCreate};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/approvals/");

/// `/approvals` surface.
#[derive(Debug, Clone)]
pub struct ApprovalsApi {
    gateway: Gateway,
}

impl ApprovalsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<TransferApproval>> {
        let payload: ListPayload<TransferApproval> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<TransferApproval> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &TransferApprovalCreate) -> ClientResult<TransferApproval> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post(ROUTES.collection, payload).await
    }

    pub async fn approve(
        &self,
        id: i64,
        approver_id: i64,
        comment: Option<&str>,
    ) -> ClientResult<TransferApproval> {
        let mut query = vec![("approver_id", approver_id.to_string())];
        if let Some(comment) = comment {
            query.push(("comment", comment.to_string()));
        }
        self.gateway
            .post_query(&ROUTES.action(id, "approve"), &query)
            .await
    }

    /// Reject a transfer. The reason is mandatory and checked before any
    /// call is issued.
    pub async fn reject(
        &self,
        id: i64,
        approver_id: i64,
        reason: &str,
    ) -> ClientResult<TransferApproval> {
        let reason = require_reason(reason)?;
        let query = [
            ("approver_id", approver_id.to_string()),
            ("reason", reason.to_string()),
        ];
        self.gateway
            .post_query(&ROUTES.action(id, "reject"), &query)
            .await
    }
}
