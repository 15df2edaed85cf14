//! Generic resource controller
//!
//! One parameterized controller replaces the per-page copy of the same
//! list/create/update/action pattern: paginated fetch tolerant of both
//! response shapes, validation before dispatch, full refetch after every
//! mutation (no optimistic merge), and supersession-safe commits.

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::page::{ListPayload, ListQuery, ResourcePage};
use tokio_util::sync::CancellationToken;
use validator::Validate;

/// Lifecycle of a list view: `Idle → Loading → {Ready | Error}`, re-entering
/// `Loading` on any filter change, page change, or post-mutation refetch.
/// `Error` is always recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Endpoint layout for one entity.
#[derive(Debug, Clone, Copy)]
pub struct ResourceRoutes {
    /// Collection path including the backend's trailing slash
    /// (e.g. `/data-assets/`).
    pub collection: &'static str,
}

impl ResourceRoutes {
    pub const fn new(collection: &'static str) -> Self {
        Self { collection }
    }

    /// Item path for one record id.
    pub fn item(&self, id: i64) -> String {
        format!("{}/{}", self.collection.trim_end_matches('/'), id)
    }

    /// Action path for one record id (`{collection}/{id}/{verb}`).
    pub fn action(&self, id: i64, verb: &str) -> String {
        format!("{}/{}/{}", self.collection.trim_end_matches('/'), id, verb)
    }
}

/// List-oriented mediator between one entity's view and the gateway.
#[derive(Debug)]
pub struct ResourceController<T> {
    gateway: Gateway,
    routes: ResourceRoutes,
    query: ListQuery,
    page: ResourcePage<T>,
    state: LoadState,
    inflight: CancellationToken,
}

impl<T: DeserializeOwned> ResourceController<T> {
    pub fn new(gateway: Gateway, routes: ResourceRoutes) -> Self {
        Self {
            gateway,
            routes,
            query: ListQuery::default(),
            page: ResourcePage::default(),
            state: LoadState::Idle,
            inflight: CancellationToken::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.page.items
    }

    /// Backend-reported total (trusted over the local item count).
    pub fn total(&self) -> u64 {
        self.page.total
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Cancel the in-flight fetch, if any. A cancelled fetch never commits
    /// its result (view navigated away).
    pub fn abort(&self) {
        self.inflight.cancel();
    }

    /// Refetch the list with the current query.
    ///
    /// On failure the list is cleared so the view never shows stale rows
    /// from an unrelated previous query; the error is also returned for the
    /// caller to surface.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.inflight.cancel();
        let token = CancellationToken::new();
        self.inflight = token.clone();
        self.state = LoadState::Loading;

        let result = self
            .gateway
            .get_query::<ListPayload<T>, _>(self.routes.collection, &self.query)
            .await
            .map(ListPayload::into_page);

        self.commit(&token, result)
    }

    /// Commit a fetch outcome unless the fetch was superseded or aborted.
    fn commit(
        &mut self,
        token: &CancellationToken,
        result: ClientResult<ResourcePage<T>>,
    ) -> ClientResult<()> {
        if token.is_cancelled() {
            return Ok(());
        }
        match result {
            Ok(page) => {
                self.page = page;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                self.page = ResourcePage::default();
                self.state = LoadState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Jump to a 1-based page and refetch.
    pub async fn set_page(&mut self, page: u32) -> ClientResult<()> {
        self.query = self.query.clone().with_page(page);
        self.refresh().await
    }

    /// Change the page size and refetch from the first page. Active filters
    /// stay in place.
    pub async fn set_page_size(&mut self, limit: u32) -> ClientResult<()> {
        self.query.limit = limit;
        self.query.skip = 0;
        self.refresh().await
    }

    /// Set a filter field (resets to the first page) and refetch.
    pub async fn set_filter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ClientResult<()> {
        self.query = self.query.clone().with_filter(key, value);
        self.refresh().await
    }

    pub async fn clear_filters(&mut self) -> ClientResult<()> {
        self.query.clear_filters();
        self.refresh().await
    }

    /// Create a record: validate, POST, then refetch. Validation failure
    /// issues no network call; server rejection leaves local state alone.
    pub async fn create<P>(&mut self, payload: &P) -> ClientResult<T>
    where
        P: Serialize + Validate + ?Sized,
    {
        payload.validate().map_err(ClientError::from)?;
        let created: T = self.gateway.post(self.routes.collection, payload).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Update a record: validate, PUT, then refetch.
    pub async fn update<P>(&mut self, id: i64, payload: &P) -> ClientResult<T>
    where
        P: Serialize + Validate + ?Sized,
    {
        payload.validate().map_err(ClientError::from)?;
        let updated: T = self.gateway.put(&self.routes.item(id), payload).await?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Delete a record, then refetch.
    pub async fn delete(&mut self, id: i64) -> ClientResult<()> {
        self.gateway
            .delete::<serde_json::Value>(&self.routes.item(id))
            .await?;
        self.refresh().await
    }

    /// Fire a status-changing action (`submit`, `calculate`, `read`, ...)
    /// and refetch after the backend confirms. The new status always comes
    /// from the refetch, never from local computation.
    pub async fn action<Q: Serialize + ?Sized>(
        &mut self,
        id: i64,
        verb: &str,
        query: &Q,
    ) -> ClientResult<serde_json::Value> {
        let response = self
            .gateway
            .post_query(&self.routes.action(id, verb), query)
            .await?;
        self.refresh().await?;
        Ok(response)
    }
}

/// Secondary, independently-loading fetch keyed off a selected record
/// (lineage graph, threshold check). Carries its own [`LoadState`] distinct
/// from the primary list's; absent data is a valid `Ready` outcome.
#[derive(Debug)]
pub struct Drilldown<T> {
    state: LoadState,
    data: Option<T>,
}

impl<T> Default for Drilldown<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            data: None,
        }
    }
}

impl<T> Drilldown<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Run the fetch; a failure clears the data but never escalates past
    /// this drill-down (the primary view stays intact).
    pub async fn load<Fut>(&mut self, fetch: Fut) -> ClientResult<()>
    where
        Fut: Future<Output = ClientResult<T>>,
    {
        self.state = LoadState::Loading;
        match fetch.await {
            Ok(data) => {
                self.data = Some(data);
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                self.data = None;
                self.state = LoadState::Error(e.to_string());
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
        self.data = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    fn offline_controller() -> ResourceController<serde_json::Value> {
        let gateway = Gateway::new(
            &ClientConfig::new("http://127.0.0.1:9"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();
        ResourceController::new(gateway, ResourceRoutes::new("/data-assets/"))
    }

    #[test]
    fn routes_build_item_and_action_paths() {
        let routes = ResourceRoutes::new("/scenarios/");
        assert_eq!(routes.item(42), "/scenarios/42");
        assert_eq!(routes.action(42, "approve"), "/scenarios/42/approve");
    }

    #[test]
    fn cancelled_fetch_never_commits() {
        let mut controller = offline_controller();
        let stale = CancellationToken::new();
        stale.cancel();

        let page = ResourcePage {
            items: vec![serde_json::json!({"id": 1})],
            total: 99,
        };
        controller.commit(&stale, Ok(page)).unwrap();
        assert!(controller.items().is_empty());
        assert_eq!(controller.state(), &LoadState::Idle);

        // a live token commits
        let live = CancellationToken::new();
        let page = ResourcePage {
            items: vec![serde_json::json!({"id": 2})],
            total: 1,
        };
        controller.commit(&live, Ok(page)).unwrap();
        assert_eq!(controller.total(), 1);
        assert!(controller.state().is_ready());
    }

    #[tokio::test]
    async fn page_size_change_keeps_filters() {
        let mut controller = offline_controller();
        let _ = controller.set_filter("status", "待审批").await;
        let _ = controller.set_page(3).await;
        assert_eq!(controller.query().skip, 20);

        let _ = controller.set_page_size(50).await;
        assert_eq!(controller.query().limit, 50);
        assert_eq!(controller.query().skip, 0);
        assert_eq!(controller.query().filters["status"], "待审批");
    }

    #[test]
    fn failed_fetch_clears_items_and_enters_error() {
        let mut controller = offline_controller();
        let live = CancellationToken::new();
        controller
            .commit(
                &live,
                Ok(ResourcePage {
                    items: vec![serde_json::json!({"id": 1})],
                    total: 1,
                }),
            )
            .unwrap();

        let err = controller
            .commit(&live, Err(ClientError::Validation("boom".into())))
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(controller.items().is_empty());
        assert!(matches!(controller.state(), LoadState::Error(_)));
    }

    #[tokio::test]
    async fn create_with_invalid_payload_issues_no_call() {
        use shared::models::RoleCreate;

        // port 9 is unroutable: any attempted request would surface as an
        // HTTP error, so a Validation error proves nothing was sent
        let mut controller = offline_controller();
        let payload = RoleCreate {
            name: String::new(),
            description: None,
            permissions: None,
        };
        let err = controller.create(&payload).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(controller.state(), &LoadState::Idle);
    }

    #[tokio::test]
    async fn drilldown_failure_keeps_state_local() {
        let mut drilldown: Drilldown<serde_json::Value> = Drilldown::new();
        let result = drilldown
            .load(async { Err(ClientError::NotFound("no lineage".into())) })
            .await;
        assert!(result.is_err());
        assert!(drilldown.data().is_none());
        assert!(matches!(drilldown.state(), LoadState::Error(_)));

        drilldown.reset();
        assert_eq!(drilldown.state(), &LoadState::Idle);
    }
}
