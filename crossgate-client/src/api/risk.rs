//! Risk assessments API

use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{RiskAssessment, RiskAssessmentCreate, RiskAssessmentUpdate, ThresholdCheck};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/risk-assessments/");

/// `/risk-assessments` surface. Scoring runs server-side (`calculate`); the
/// client submits dimension inputs and reads results back.
#[derive(Debug, Clone)]
pub struct RiskApi {
    gateway: Gateway,
}

impl RiskApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<RiskAssessment>> {
        let payload: ListPayload<RiskAssessment> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<RiskAssessment> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &RiskAssessmentCreate) -> ClientResult<RiskAssessment> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post(ROUTES.collection, payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &RiskAssessmentUpdate,
    ) -> ClientResult<RiskAssessment> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.put(&ROUTES.item(id), payload).await
    }

    /// Ask the backend to (re)compute the overall score and level.
    pub async fn calculate(&self, id: i64) -> ClientResult<RiskAssessment> {
        self.gateway
            .post_empty(&ROUTES.action(id, "calculate"))
            .await
    }

    /// Threshold warnings for one assessment (drill-down fetch).
    pub async fn threshold_check(&self, id: i64) -> ClientResult<ThresholdCheck> {
        let path = format!("{}/threshold-check", ROUTES.item(id));
        self.gateway.get(&path).await
    }
}
