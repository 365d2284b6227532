//! Reverse geocoding via OpenStreetMap Nominatim

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::GeocodingConfig,
    error::{AppError, AppResult},
};

/// Provider abstraction so the location workflow runs without a network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve a coordinate pair to a human-readable address.
    async fn reverse(&self, latitude: f64, longitude: f64) -> AppResult<String>;
}

/// Nominatim client. Calls are fire-and-forget with a short timeout; the
/// caller degrades to a coordinate-derived address on any failure.
pub struct NominatimGeocoder {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        // Nominatim's usage policy requires an identifying User-Agent.
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ecycle-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> AppResult<String> {
        let response = self
            .http
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .send()
            .await
            .map_err(AppError::Network)?;

        if !response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), "nominatim error response");
            return Err(AppError::Degraded("Reverse geocoding".to_string()));
        }

        let body: ReverseResponse = response.json().await.map_err(AppError::Network)?;
        body.display_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::Degraded("Reverse geocoding".to_string()))
    }
}
