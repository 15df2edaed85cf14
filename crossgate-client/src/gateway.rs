//! API gateway client
//!
//! The single chokepoint for every backend call: one configured reqwest
//! client, bearer decoration from the injected session store, envelope
//! unwrapping, and the only cross-cutting error path (401 teardown).

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::{Envelope, ErrorBody};
use std::sync::Arc;
use std::time::Duration;

/// Called after a 401 tears the session down. Deferred ~100 ms so an
/// in-flight transition can finish before the caller redirects to login.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

const EXPIRED_HOOK_DELAY: Duration = Duration::from_millis(100);

/// HTTP gateway to the governance backend.
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    api_root: String,
    session: Arc<dyn SessionStore>,
    expired_hook: Option<SessionExpiredHook>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("api_root", &self.api_root)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Build a gateway from configuration and an injected session store.
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            api_root: config.api_root(),
            session,
            expired_hook: None,
        })
    }

    /// Register the hook invoked after a 401 clears the session.
    pub fn with_session_expired_hook(mut self, hook: SessionExpiredHook) -> Self {
        self.expired_hook = Some(hook);
        self
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Attach the bearer credential when a session exists; otherwise the
    /// call proceeds unauthenticated and the server decides.
    fn decorate(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token),
            ),
            None => request,
        }
    }

    // ========== Verbs ==========

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.get(self.url(path));
        self.send(request).await
    }

    /// GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.client.get(self.url(path)).query(query);
        self.send(request).await
    }

    /// GET returning the raw response (file downloads). Status is checked;
    /// the body is left to the caller.
    pub async fn get_raw<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<reqwest::Response> {
        let request = self.decorate(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();

        // downloads go through the same 401 teardown as JSON calls
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ClientError::Unauthorized);
        }

        Err(self.error_for(status, text))
    }

    /// POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request).await
    }

    /// POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.post(self.url(path));
        self.send(request).await
    }

    /// POST request carrying parameters in the query string, no body
    /// (approve/reject/scan-style action endpoints)
    pub async fn post_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.client.post(self.url(path)).query(query);
        self.send(request).await
    }

    /// POST with a form-encoded body (login is the only caller)
    pub async fn post_form<T: DeserializeOwned, F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> ClientResult<T> {
        let request = self.client.post(self.url(path)).form(form);
        self.send(request).await
    }

    /// PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.client.put(self.url(path)).json(body);
        self.send(request).await
    }

    /// PUT request without body (mark-read style toggles)
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.put(self.url(path));
        self.send(request).await
    }

    /// PUT request with query-string parameters, no body
    pub async fn put_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.client.put(self.url(path)).query(query);
        self.send(request).await
    }

    /// DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.client.delete(self.url(path));
        self.send(request).await
    }

    // ========== Response handling ==========

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = self.decorate(request).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            // Unwrap an optional {"data": ...} envelope so callers never
            // see the transport shape.
            let envelope: Envelope<T> = response.json().await?;
            return Ok(envelope.into_inner());
        }

        let text = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ClientError::Unauthorized);
        }

        Err(self.error_for(status, text))
    }

    fn error_for(&self, status: StatusCode, text: String) -> ClientError {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message())
            .unwrap_or(text);

        match status {
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// 401 teardown. Only acts when a token is actually stored: a rejected
    /// unauthenticated call (bad login, expired link) must not loop back
    /// through the hook.
    fn expire_session(&self) {
        if self.session.token().is_none() {
            return;
        }

        tracing::warn!("session rejected by server, clearing stored token");
        self.session.clear();

        if let Some(hook) = self.expired_hook.clone() {
            tokio::spawn(async move {
                tokio::time::sleep(EXPIRED_HOOK_DELAY).await;
                hook();
            });
        }
    }
}
