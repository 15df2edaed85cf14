//! Notifications API

use crate::controller::ResourceRoutes;
use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use shared::models::{Notification, NotificationCreate, NotificationStats};
use shared::page::{ListPayload, ListQuery, ResourcePage};
use shared::response::MessageResponse;
use validator::Validate;

pub const ROUTES: ResourceRoutes = ResourceRoutes::new("/notifications/");

/// `/notifications` surface.
#[derive(Debug, Clone)]
pub struct NotificationsApi {
    gateway: Gateway,
}

impl NotificationsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<ResourcePage<Notification>> {
        let payload: ListPayload<Notification> =
            self.gateway.get_query(ROUTES.collection, query).await?;
        Ok(payload.into_page())
    }

    pub async fn get(&self, id: i64) -> ClientResult<Notification> {
        self.gateway.get(&ROUTES.item(id)).await
    }

    pub async fn create(&self, payload: &NotificationCreate) -> ClientResult<Notification> {
        payload.validate().map_err(ClientError::from)?;
        self.gateway.post("/notifications", payload).await
    }

    pub async fn stats(&self) -> ClientResult<NotificationStats> {
        self.gateway.get("/notifications/stats").await
    }

    pub async fn mark_read(&self, id: i64) -> ClientResult<Notification> {
        self.gateway.put_empty(&ROUTES.action(id, "read")).await
    }

    pub async fn mark_all_read(&self) -> ClientResult<MessageResponse> {
        self.gateway.put_empty("/notifications/read-all").await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<MessageResponse> {
        self.gateway.delete(&ROUTES.item(id)).await
    }
}
