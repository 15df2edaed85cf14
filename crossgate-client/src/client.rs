//! Facade client
//!
//! One `CrossgateClient` per session. It owns the gateway and hands out the
//! per-resource API surfaces; everything Clones cheaply because the gateway
//! shares its reqwest pool and session store internally.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::api::{
    ApprovalsApi, AuditApi, AuthApi, BatchApi, DashboardApi, DataAssetsApi, InterceptionApi,
    NotificationsApi, RiskApi, RolesApi, ScenariosApi, SystemConfigApi, UsersApi,
};
use crate::config::ClientConfig;
use crate::controller::{ResourceController, ResourceRoutes};
use crate::error::ClientResult;
use crate::export::ExportApi;
use crate::gateway::{Gateway, SessionExpiredHook};
use crate::session::SessionStore;
use shared::models::{CurrentUser, Token};

/// Entry point for the whole API surface.
#[derive(Debug, Clone)]
pub struct CrossgateClient {
    gateway: Gateway,
}

impl CrossgateClient {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let gateway = Gateway::new(config, session)?;
        Ok(Self { gateway })
    }

    /// Register a callback for credential expiry (server rejected a stored
    /// token with 401). Fired at most once per expiry, after a short delay.
    pub fn with_session_expired_hook(mut self, hook: SessionExpiredHook) -> Self {
        self.gateway = self.gateway.with_session_expired_hook(hook);
        self
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn is_logged_in(&self) -> bool {
        self.gateway.session().token().is_some()
    }

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Token> {
        self.auth().login(username, password).await
    }

    pub fn logout(&self) {
        self.auth().logout();
    }

    pub async fn me(&self) -> ClientResult<CurrentUser> {
        self.auth().me().await
    }

    /// Paged controller over any listable resource.
    pub fn controller<T: DeserializeOwned>(&self, routes: ResourceRoutes) -> ResourceController<T> {
        ResourceController::new(self.gateway.clone(), routes)
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.gateway.clone())
    }

    pub fn data_assets(&self) -> DataAssetsApi {
        DataAssetsApi::new(self.gateway.clone())
    }

    pub fn scenarios(&self) -> ScenariosApi {
        ScenariosApi::new(self.gateway.clone())
    }

    pub fn approvals(&self) -> ApprovalsApi {
        ApprovalsApi::new(self.gateway.clone())
    }

    pub fn risk(&self) -> RiskApi {
        RiskApi::new(self.gateway.clone())
    }

    pub fn audit(&self) -> AuditApi {
        AuditApi::new(self.gateway.clone())
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.gateway.clone())
    }

    pub fn roles(&self) -> RolesApi {
        RolesApi::new(self.gateway.clone())
    }

    pub fn notifications(&self) -> NotificationsApi {
        NotificationsApi::new(self.gateway.clone())
    }

    pub fn system_config(&self) -> SystemConfigApi {
        SystemConfigApi::new(self.gateway.clone())
    }

    pub fn interception(&self) -> InterceptionApi {
        InterceptionApi::new(self.gateway.clone())
    }

    pub fn batch(&self) -> BatchApi {
        BatchApi::new(self.gateway.clone())
    }

    pub fn dashboard(&self) -> DashboardApi {
        DashboardApi::new(self.gateway.clone())
    }

    pub fn export(&self) -> ExportApi {
        ExportApi::new(self.gateway.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn login_state_tracks_session_store() {
        let session = Arc::new(MemorySessionStore::new());
        let config = ClientConfig::new("http://127.0.0.1:9");
        let client = CrossgateClient::new(&config, session.clone()).unwrap();

        assert!(!client.is_logged_in());
        session.set_token("abc");
        assert!(client.is_logged_in());
        client.logout();
        assert!(!client.is_logged_in());
    }
}
