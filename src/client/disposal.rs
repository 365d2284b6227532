//! Disposal request endpoints

use async_trait::async_trait;

use super::Transport;
use crate::{
    error::AppResult,
    models::enums::DisposalStatus,
    models::request::{DisposalRequest, NewDisposalRequest, StatusUpdate},
};

/// Disposal request surface used by the form controller and the lifecycle
/// views. Trait seam for tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisposalApi: Send + Sync {
    async fn submit(&self, request: &NewDisposalRequest) -> AppResult<DisposalRequest>;
    async fn list(&self, status: Option<DisposalStatus>) -> AppResult<Vec<DisposalRequest>>;
    async fn get(&self, id: &str) -> AppResult<DisposalRequest>;
    async fn update_status(&self, id: &str, update: &StatusUpdate) -> AppResult<DisposalRequest>;
}

#[derive(Clone)]
pub struct DisposalClient {
    transport: Transport,
}

impl DisposalClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl DisposalApi for DisposalClient {
    async fn submit(&self, request: &NewDisposalRequest) -> AppResult<DisposalRequest> {
        self.transport.post("/disposal/request", request).await
    }

    /// Full result set; "all statuses" is expressed by omitting the
    /// query parameter.
    async fn list(&self, status: Option<DisposalStatus>) -> AppResult<Vec<DisposalRequest>> {
        match status {
            Some(status) => {
                self.transport
                    .get_with_query("/disposal/requests", &[("status", status.as_str())])
                    .await
            }
            None => self.transport.get("/disposal/requests").await,
        }
    }

    async fn get(&self, id: &str) -> AppResult<DisposalRequest> {
        self.transport
            .get(&format!("/disposal/requests/{}", id))
            .await
    }

    async fn update_status(&self, id: &str, update: &StatusUpdate) -> AppResult<DisposalRequest> {
        self.transport
            .put(&format!("/disposal/requests/{}/status", id), update)
            .await
    }
}
