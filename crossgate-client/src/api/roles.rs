//! Roles API

use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{Role, RoleCreate, RoleUpdate, UserRoleAssign};
use shared::page::{ListPayload, ResourcePage};
use shared::response::MessageResponse;
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/roles/");

/// `/roles` surface. Role listing is small and unpaginated.
#[derive(Debug, Clone)]
pub struct RolesApi {
    gateway: Gateway,
}

impl RolesApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> ClientResult<ResourcePage<Role>> {
        let payload: ListPayload<Role> = self.gateway.get(ROUTES.collection).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<Role> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &RoleCreate) -> ClientResult<Role> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post(ROUTES.collection, payload).await
    }

    pub async fn update(&self, id: i64, payload: &RoleUpdate) -> ClientResult<Role> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.put(&ROUTES.item(id), payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.gateway.delete(&ROUTES.item(id)).await
    }

    /// Replace a user's role set.
    pub async fn assign(&self, payload: &UserRoleAssign) -> ClientResult<MessageResponse> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post("/roles/assign", payload).await
    }

    /// Effective permission strings for one user (union of role grants).
    pub async fn user_permissions(&self, user_id: i64) -> ClientResult<Vec<String>> {
        let path = format!("/roles/user/{}/permissions", user_id);
        self.gateway.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn assign_without_roles_issues_no_call() {
        let gateway = Gateway::new(
            &ClientConfig::new("http://127.0.0.1:9"),
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();
        let api = RolesApi::new(gateway);

        let err = api
            .assign(&UserRoleAssign {
                user_id: 3,
                role_ids: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
