//! Dashboard API
//!
//! Read-only backend aggregations, all parameterized by a day window. The
//! payloads are chart feeds whose shapes belong to the backend, so they are
//! passed through as raw JSON.

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use serde_json::Value;

/// `/dashboard` surface.
#[derive(Debug, Clone)]
pub struct DashboardApi {
    gateway: Gateway,
}

/// One settled snapshot of the headline dashboard queries.
///
/// Every branch settles independently: one failing statistic never blanks
/// the others. Failures stay attributable per branch.
#[derive(Debug, Default)]
pub struct DashboardSnapshot {
    pub overview: Option<Value>,
    pub transfer_trends: Option<Value>,
    pub country_distribution: Option<Value>,
    pub risk_alerts: Option<Value>,
    pub data_asset_statistics: Option<Value>,
    pub risk_statistics: Option<Value>,
    pub approval_statistics: Option<Value>,
    pub operation_statistics: Option<Value>,
    /// Failed branches by name, for logging/partial rendering.
    pub failures: Vec<(&'static str, ClientError)>,
}

impl DashboardSnapshot {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn settle(
    branch: &'static str,
    result: ClientResult<Value>,
    failures: &mut Vec<(&'static str, ClientError)>,
) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(branch, "dashboard branch failed: {}", e);
            failures.push((branch, e));
            None
        }
    }
}

impl DashboardApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    async fn windowed(&self, path: &str, days: u32) -> ClientResult<Value> {
        self.gateway.get_query(path, &[("days", days)]).await
    }

    pub async fn overview(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/overview", days).await
    }

    pub async fn transfer_trends(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/transfer-trends", days).await
    }

    pub async fn country_distribution(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/country-distribution", days).await
    }

    pub async fn risk_alerts(&self) -> ClientResult<Value> {
        self.gateway.get("/dashboard/risk-alerts").await
    }

    pub async fn data_asset_statistics(&self) -> ClientResult<Value> {
        self.gateway.get("/dashboard/data-asset-statistics").await
    }

    pub async fn risk_statistics(&self) -> ClientResult<Value> {
        self.gateway.get("/dashboard/risk-statistics").await
    }

    pub async fn approval_statistics(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/approval-statistics", days).await
    }

    pub async fn operation_statistics(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/operation-statistics", days).await
    }

    pub async fn heatmap(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/heatmap", days).await
    }

    pub async fn approval_funnel(&self, days: u32) -> ClientResult<Value> {
        self.windowed("/dashboard/approval-funnel", days).await
    }

    pub async fn risk_scatter(&self) -> ClientResult<Value> {
        self.gateway.get("/dashboard/risk-scatter").await
    }

    pub async fn risk_radar(&self, assessment_id: Option<i64>) -> ClientResult<Value> {
        match assessment_id {
            Some(id) => {
                self.gateway
                    .get_query("/dashboard/risk-radar", &[("assessment_id", id)])
                    .await
            }
            None => self.gateway.get("/dashboard/risk-radar").await,
        }
    }

    /// Fan out the headline queries concurrently and settle each branch
    /// independently.
    pub async fn snapshot(&self, days: u32) -> DashboardSnapshot {
        let (
            overview,
            transfer_trends,
            country_distribution,
            risk_alerts,
            data_asset_statistics,
            risk_statistics,
            approval_statistics,
            operation_statistics,
        ) = tokio::join!(
            self.overview(days),
            self.transfer_trends(days),
            self.country_distribution(days),
            self.risk_alerts(),
            self.data_asset_statistics(),
            self.risk_statistics(),
            self.approval_statistics(days),
            self.operation_statistics(days),
        );

        let mut failures = Vec::new();
        DashboardSnapshot {
            overview: settle("overview", overview, &mut failures),
            transfer_trends: settle("transfer_trends", transfer_trends, &mut failures),
            country_distribution: settle(
                "country_distribution",
                country_distribution,
                &mut failures,
            ),
            risk_alerts: settle("risk_alerts", risk_alerts, &mut failures),
            data_asset_statistics: settle(
                "data_asset_statistics",
                data_asset_statistics,
                &mut failures,
            ),
            risk_statistics: settle("risk_statistics", risk_statistics, &mut failures),
            approval_statistics: settle("approval_statistics", approval_statistics, &mut failures),
            operation_statistics: settle(
                "operation_statistics",
                operation_statistics,
                &mut failures,
            ),
            failures,
        }
    }
}
