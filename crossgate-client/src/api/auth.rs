//! Authentication API

use crate::error::ClientResult;
use crate::gateway::Gateway;
use shared::models::{CurrentUser, Token};

/// `/auth` surface: login, identity, permission list.
#[derive(Debug, Clone)]
pub struct AuthApi {
    gateway: Gateway,
}

impl AuthApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Login with username and password (form-encoded, OAuth2 password
    /// flow). On success the token is stored in the session.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Token> {
        let form = [("username", username), ("password", password)];
        let token: Token = self.gateway.post_form("/auth/login", &form).await?;
        self.gateway.session().set_token(&token.access_token);
        Ok(token)
    }

    /// Drop the stored session. Purely client-side; the token is opaque and
    /// the backend holds no session state.
    pub fn logout(&self) {
        self.gateway.session().clear();
    }

    /// Current user identity.
    pub async fn me(&self) -> ClientResult<CurrentUser> {
        self.gateway.get("/auth/me").await
    }

    /// Current user's permission strings. Order is irrelevant; `"*"` grants
    /// everything.
    pub async fn my_permissions(&self) -> ClientResult<Vec<String>> {
        self.gateway.get("/auth/me/permissions").await
    }

    /// Fail-closed variant: any failure logs and yields an empty set, which
    /// callers must treat as "no permissions", not as an error to retry.
    pub async fn my_permissions_or_empty(&self) -> Vec<String> {
        match self.my_permissions().await {
            Ok(permissions) => permissions,
            Err(e) => {
                tracing::warn!("failed to fetch user permissions: {}", e);
                Vec::new()
            }
        }
    }
}
