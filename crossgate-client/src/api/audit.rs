//! Audit logs API (read-only)

use crate::controller::ResourceRoutes;
use crate::error::ClientResult;
use crate::gateway::Gateway;
use shared::models::AuditLog;
use shared::page::{ListPayload, ListQuery, ResourcePage};

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/audit/");

/// `/audit` surface. Statistics and anomaly detection are backend
/// aggregations passed through untyped.
#[derive(Debug, Clone)]
pub struct AuditApi {
    gateway: Gateway,
}

impl AuditApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<AuditLog>> {
        let payload: ListPayload<AuditLog> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    /// Aggregated operation statistics over a day window.
    pub async fn statistics(&self, days: u32) -> ClientResult<serde_json::Value> {
        self.gateway
            .get_query("/audit/statistics", &[("days", days)])
            .await
    }

    /// Detected anomalous operations.
    pub async fn anomalies(&self, query: &ListQuery) -> ClientResult<ResourcePage<AuditLog>> {
        let payload: ListPayload<AuditLog> =
            self.gateway.get_query("/audit/anomalies", query).await?;
        Ok(payload.into_page())
    }
}
