//! Data assets API

use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{DataAsset, DataAssetCreate, DataAssetUpdate, LineageGraph};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use shared::response::MessageResponse;
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/data-assets/");

/// Lineage depth accepted by the backend.
pub const LINEAGE_DEPTH_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
pub const DEFAULT_LINEAGE_DEPTH: u32 = 2;

/// `/data-assets` surface.
#[derive(Debug, Clone)]
pub struct DataAssetsApi {
    gateway: Gateway,
}

impl DataAssetsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<DataAsset>> {
        let payload: ListPayload<DataAsset> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<DataAsset> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &DataAssetCreate) -> ClientResult<DataAsset> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post(ROUTES.collection, payload).await
    }

    pub async fn update(&self, id: i64, payload: &DataAssetUpdate) -> ClientResult<DataAsset> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.put(&ROUTES.item(id), payload).await
    }

    /// Trigger a catalog scan, optionally narrowed to one source system.
    pub async fn scan(&self, source_system: Option<&str>) -> ClientResult<MessageResponse> {
        match source_system {
            Some(system) => {
                self.gateway
                    .post_query("/data-assets/scan", &[("source_system", system)])
                    .await
            }
            None => self.gateway.post_empty("/data-assets/scan").await,
        }
    }

    /// Lineage graph for one asset. Zero edges is a valid empty graph, not
    /// an error.
    pub async fn lineage(&self, id: i64, depth: u32) -> ClientResult<LineageGraph> {
        if !LINEAGE_DEPTH_RANGE.contains(&depth) {
            return Err(ClientError::Validation(format!(
                "血缘深度需在{}-{}之间",
                LINEAGE_DEPTH_RANGE.start(),
                LINEAGE_DEPTH_RANGE.end()
            )));
        }
        let path = format!("{}/lineage", ROUTES.item(id));
        self.gateway.get_query(&path, &[("depth", depth)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    fn offline_api() -> DataAssetsApi {
        let gateway = Gateway::new(
            &ClientConfig::new("http://127.0.0.1:9"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();
        DataAssetsApi::new(gateway)
    }

    #[tokio::test]
    async fn lineage_depth_is_bounded_client_side() {
        let api = offline_api();
        let err = api.lineage(42, 0).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        let err = api.lineage(42, 6).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
