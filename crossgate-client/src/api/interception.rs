//! Interception and desensitization API
//!
//! The desensitization engine and interception rules run server-side; this
//! surface only manages the allow/deny lists and submits data for masking.

use crate::error::ClientResult;
use crate::gateway::Gateway;
use serde::Serialize;
use shared::models::{
    BlacklistEntry, DesensitizationRequest, DesensitizationResponse, InterceptionCheckRequest,
    InterceptionCheckResponse, WhitelistEntry,
};
use shared::response::MessageResponse;

#[derive(Debug, Serialize)]
struct BlacklistReason<'a> {
    reason: Option<&'a str>,
}

/// `/interception` surface.
#[derive(Debug, Clone)]
pub struct InterceptionApi {
    gateway: Gateway,
}

impl InterceptionApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Pre-transfer check against whitelist/blacklist rules.
    pub async fn check(
        &self,
        request: &InterceptionCheckRequest,
    ) -> ClientResult<InterceptionCheckResponse> {
        self.gateway.post("/interception/check", request).await
    }

    pub async fn whitelist(&self) -> ClientResult<Vec<WhitelistEntry>> {
        self.gateway.get("/interception/whitelist").await
    }

    pub async fn add_to_whitelist(&self, approval_id: i64) -> ClientResult<MessageResponse> {
        let path = format!("/interception/whitelist/{}", approval_id);
        self.gateway.post_empty(&path).await
    }

    pub async fn remove_from_whitelist(&self, approval_id: i64) -> ClientResult<MessageResponse> {
        let path = format!("/interception/whitelist/{}", approval_id);
        self.gateway.delete(&path).await
    }

    pub async fn blacklist(&self) -> ClientResult<Vec<BlacklistEntry>> {
        self.gateway.get("/interception/blacklist").await
    }

    pub async fn add_to_blacklist(
        &self,
        asset_id: i64,
        reason: Option<&str>,
    ) -> ClientResult<MessageResponse> {
        let path = format!("/interception/blacklist/{}", asset_id);
        self.gateway.post(&path, &BlacklistReason { reason }).await
    }

    pub async fn remove_from_blacklist(&self, asset_id: i64) -> ClientResult<MessageResponse> {
        let path = format!("/interception/blacklist/{}", asset_id);
        self.gateway.delete(&path).await
    }

    /// Submit fields for masking; returns the masked copy and the rules the
    /// server applied.
    pub async fn desensitize(
        &self,
        request: &DesensitizationRequest,
    ) -> ClientResult<DesensitizationResponse> {
        self.gateway.post("/interception/desensitize", request).await
    }
}
