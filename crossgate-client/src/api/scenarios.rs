//! Cross-border scenarios API

use super::require_reason;
use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{Scenario, ScenarioCreate, ScenarioUpdate};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/scenarios/");

/// `/scenarios` surface. Approval-state transitions are backend-owned; the
/// approve/reject/submit calls only request them.
#[derive(Debug, Clone)]
pub struct ScenariosApi {
    gateway: Gateway,
}

impl ScenariosApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<Scenario>> {
        let payload: ListPayload<Scenario> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<Scenario> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &ScenarioCreate) -> ClientResult<Scenario> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post(ROUTES.collection, payload).await
    }

    pub async fn update(&self, id: i64, payload: &ScenarioUpdate) -> ClientResult<Scenario> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.put(&ROUTES.item(id), payload).await
    }

    /// Submit a draft for approval.
    pub async fn submit(&self, id: i64) -> ClientResult<Scenario> {
        self.gateway.post_empty(&ROUTES.action(id, "submit")).await
    }

    pub async fn approve(
        &self,
        id: i64,
        approver_id: i64,
        comment: Option<&str>,
    ) -> ClientResult<Scenario> {
        let mut query = vec![("approver_id", approver_id.to_string())];
        if let Some(comment) = comment {
            query.push(("comment", comment.to_string()));
        }
        self.gateway
            .post_query(&ROUTES.action(id, "approve"), &query)
            .await
    }

    /// Reject a scenario. The reason is mandatory and checked before any
    /// call is issued.
    pub async fn reject(&self, id: i64, approver_id: i64, reason: &str) -> ClientResult<Scenario> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn reject_without_reason_issues_no_call() {
        // unroutable address: a dispatched request would fail as Http, so a
        // Validation error proves the guard fired first
        let gateway = Gateway::new(
            &ClientConfig::new("http://127.0.0.1:9"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();
        let api = ScenariosApi::new(gateway);

        let err = api.reject(1, 2, "  ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
