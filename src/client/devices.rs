//! Device inventory endpoint

use async_trait::async_trait;
use serde::Deserialize;

use super::Transport;
use crate::{error::AppResult, models::device::Device};

/// Inventory read surface the catalog accessor depends on; a trait so the
/// workflow can be exercised without a live backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DevicesApi: Send + Sync {
    /// Department-scoped device inventory.
    async fn list(&self) -> AppResult<Vec<Device>>;
}

#[derive(Clone)]
pub struct DevicesClient {
    transport: Transport,
}

#[derive(Debug, Deserialize)]
struct DeviceListData {
    devices: Vec<Device>,
}

impl DevicesClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl DevicesApi for DevicesClient {
    async fn list(&self) -> AppResult<Vec<Device>> {
        let data: DeviceListData = self.transport.get("/devices").await?;
        Ok(data.devices)
    }
}
