//! Users API

use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{User, UserCreate, UserUpdate};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use shared::response::MessageResponse;
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/users/");

/// `/users` surface.
#[derive(Debug, Clone)]
pub struct UsersApi {
    gateway: Gateway,
}

impl UsersApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<User>> {
        let payload: ListPayload<User> = self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<User> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &UserCreate) -> ClientResult<User> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post(ROUTES.collection, payload).await
    }

    pub async fn update(&self, id: i64, payload: &UserUpdate) -> ClientResult<User> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.put(&ROUTES.item(id), payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.gateway.delete(&ROUTES.item(id)).await
    }
}
