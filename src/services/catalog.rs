//! Device catalog accessor

use std::sync::Arc;

use crate::{client::devices::DevicesApi, models::device::Device};

/// Fetch state for the department inventory
#[derive(Debug, Default)]
pub struct CatalogState {
    pub devices: Vec<Device>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Read-only inventory cache for one page session. One network call on
/// load, no retries; a failed fetch surfaces the error and leaves the
/// device list empty.
pub struct DeviceCatalog {
    api: Arc<dyn DevicesApi>,
    state: CatalogState,
    loaded: bool,
}

impl DeviceCatalog {
    pub fn new(api: Arc<dyn DevicesApi>) -> Self {
        Self {
            api,
            state: CatalogState::default(),
            loaded: false,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn devices(&self) -> &[Device] {
        &self.state.devices
    }

    /// Fetch the inventory once; later calls are no-ops. Use
    /// [`DeviceCatalog::refresh`] to re-fetch explicitly.
    pub async fn load(&mut self) -> &CatalogState {
        if self.loaded {
            return &self.state;
        }
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> &CatalogState {
        self.state.loading = true;
        self.state.error = None;

        match self.api.list().await {
            Ok(devices) => {
                tracing::debug!(count = devices.len(), "device inventory loaded");
                self.state.devices = devices;
            }
            Err(error) => {
                tracing::warn!(%error, "device inventory fetch failed");
                self.state.devices = Vec::new();
                self.state.error = Some(error.to_string());
            }
        }

        self.state.loading = false;
        self.loaded = true;
        &self.state
    }
}
