//! System configuration API

use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{
    ConfigType, SystemConfig, SystemConfigCreate, SystemConfigUpdate, validate_config_value,
};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use shared::response::MessageResponse;
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/system-config/");

/// `/system-config` surface. Values are strings on the wire; they are
/// checked against the entry's declared type before any update call.
#[derive(Debug, Clone)]
pub struct SystemConfigApi {
    gateway: Gateway,
}

impl SystemConfigApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<SystemConfig>> {
        let payload: ListPayload<SystemConfig> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<SystemConfig> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn get_by_key(&self, key: &str) -> ClientResult<SystemConfig> {
        let path = format!("/system-config/key/{}", key);
        self.gateway.get(&path).await
    }

    /// Entries flagged `is_public` (no permission gate).
    pub async fn get_public(&self) -> ClientResult<Vec<SystemConfig>> {
        self.gateway.get("/system-config/public").await
    }

    pub async fn create(&self, payload: &SystemConfigCreate) -> ClientResult<SystemConfig> {
        payload.validate().map_err(ClientError::from)?;
        validate_config_value(payload.config_type, &payload.config_value)
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.gateway.post("/system-config", payload).await
    }

    /// Update an entry. `config_type` is the entry's declared type and is
    /// used to validate a new value client-side before dispatch.
    pub async fn update(
        &self,
        id: i64,
        config_type: ConfigType,
        payload: &SystemConfigUpdate,
    ) -> ClientResult<SystemConfig> {
        payload.validate().map_err(ClientError::from)?;
        if let Some(value) = &payload.config_value {
            validate_config_value(config_type, value)
                .map_err(|e| ClientError::Validation(e.to_string()))?;
        }
        self.gateway.put(&ROUTES.item(id), payload).await
    }

    /// Set one value by key, validated against the declared type first.
    pub async fn set_value(
        &self,
        key: &str,
        config_type: ConfigType,
        value: &str,
    ) -> ClientResult<SystemConfig> {
        validate_config_value(config_type, value)
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let path = format!("/system-config/key/{}/value", key);
        self.gateway.put_query(&path, &[("value", value)]).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.gateway.delete(&ROUTES.item(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn integer_value_with_fraction_issues_no_put() {
        let gateway = Gateway::new(
            &ClientConfig::new("http://127.0.0.1:9"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();
        let api = SystemConfigApi::new(gateway);

        let err = api
            .set_value("personal_info_max", ConfigType::Integer, "12.5")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
