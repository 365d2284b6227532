//! Client-side workflow services
//!
//! One module per workflow component. `Services` holds the shared gateway
//! handles and mints per-view instances the way an embedding shell mounts
//! components: each instance owns its own state, so there is no shared
//! mutable cache between views.

pub mod catalog;
pub mod form;
pub mod lifecycle;
pub mod location;
pub mod selection;

use std::sync::Arc;

use crate::{
    client::{
        devices::DevicesApi,
        disposal::DisposalApi,
        geocoding::{NominatimGeocoder, ReverseGeocoder},
        ApiClient,
    },
    config::{AppConfig, GeocodingConfig},
    error::{AppError, AppResult},
    session::Session,
};

/// Container for the gateway handles behind all workflow components
#[derive(Clone)]
pub struct Services {
    devices: Arc<dyn DevicesApi>,
    disposal: Arc<dyn DisposalApi>,
    geocoder: Arc<dyn ReverseGeocoder>,
    geocoding_config: GeocodingConfig,
    session: Arc<Session>,
}

impl Services {
    /// Wire the REST gateway and geocoder from configuration.
    pub fn new(config: &AppConfig, session: Arc<Session>) -> AppResult<Self> {
        let api = ApiClient::new(&config.backend, session.clone())?;
        let geocoder = NominatimGeocoder::new(&config.geocoding)?;

        Ok(Self {
            devices: Arc::new(api.devices),
            disposal: Arc::new(api.disposal),
            geocoder: Arc::new(geocoder),
            geocoding_config: config.geocoding.clone(),
            session,
        })
    }

    pub fn device_catalog(&self) -> catalog::DeviceCatalog {
        catalog::DeviceCatalog::new(self.devices.clone())
    }

    pub fn device_selection(&self) -> selection::DeviceSelection {
        selection::DeviceSelection::new()
    }

    pub fn location_resolver(&self) -> location::LocationResolver {
        location::LocationResolver::new(self.geocoder.clone(), &self.geocoding_config)
    }

    /// A fresh disposal form bound to the signed-in user's profile.
    pub fn disposal_form(&self) -> AppResult<form::DisposalForm> {
        let profile = self.session.profile().ok_or(AppError::AuthExpired)?;
        Ok(form::DisposalForm::new(self.disposal.clone(), profile))
    }

    pub fn request_list(&self) -> lifecycle::RequestList {
        lifecycle::RequestList::new(self.disposal.clone())
    }

    pub fn request_detail(&self, id: impl Into<String>) -> lifecycle::RequestDetail {
        lifecycle::RequestDetail::new(self.disposal.clone(), id)
    }
}
