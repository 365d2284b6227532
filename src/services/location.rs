//! Pickup location resolution
//!
//! Converts a chosen map point into a postal address through the geocoding
//! provider, degrading to a coordinate-derived string when the provider is
//! down. When the map widget itself fails to initialize the workflow keeps
//! going in manual-entry mode; the address field is never left empty once a
//! coordinate has been chosen.

use std::sync::Arc;

use crate::{client::geocoding::ReverseGeocoder, config::GeocodingConfig};

/// Map/geocoding widget availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapAvailability {
    Ready,
    /// Provider failed to initialize; the map is hidden and manual address
    /// entry stays live.
    Unavailable,
}

/// Resolved pickup point handed back to the form
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

pub struct LocationResolver {
    geocoder: Arc<dyn ReverseGeocoder>,
    availability: MapAvailability,
    default_position: (f64, f64),
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>, config: &GeocodingConfig) -> Self {
        Self {
            geocoder,
            availability: MapAvailability::Ready,
            default_position: (config.default_latitude, config.default_longitude),
        }
    }

    pub fn availability(&self) -> MapAvailability {
        self.availability
    }

    /// Record a failed map initialization; switches callers to manual mode.
    pub fn mark_unavailable(&mut self) {
        self.availability = MapAvailability::Unavailable;
    }

    /// Explicit user-triggered retry after a failed initialization.
    pub fn retry_init(&mut self) {
        self.availability = MapAvailability::Ready;
    }

    /// Starting coordinate when device geolocation is denied or absent.
    /// Geolocation failure is silent and never blocks the form.
    pub fn default_position(&self) -> (f64, f64) {
        self.default_position
    }

    /// Reverse-geocode a chosen point. Provider failure degrades to a
    /// coordinate-derived address rather than blocking submission.
    pub async fn resolve(&self, latitude: f64, longitude: f64) -> ResolvedLocation {
        let address = match self.geocoder.reverse(latitude, longitude).await {
            Ok(address) => address,
            Err(error) => {
                tracing::warn!(%error, "reverse geocoding failed, using coordinate fallback");
                fallback_address(latitude, longitude)
            }
        };

        ResolvedLocation {
            latitude,
            longitude,
            address,
        }
    }

    /// Manual-entry pass-through used when the map is unavailable. An empty
    /// typed address still gets the coordinate fallback.
    pub fn manual(&self, latitude: f64, longitude: f64, address: &str) -> ResolvedLocation {
        let trimmed = address.trim();
        ResolvedLocation {
            latitude,
            longitude,
            address: if trimmed.is_empty() {
                fallback_address(latitude, longitude)
            } else {
                trimmed.to_string()
            },
        }
    }
}

/// Best-effort address when no geocode is available.
fn fallback_address(latitude: f64, longitude: f64) -> String {
    format!("Location: {:.4}, {:.4}", latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::geocoding::MockReverseGeocoder;
    use crate::error::AppError;

    fn resolver(geocoder: MockReverseGeocoder) -> LocationResolver {
        LocationResolver::new(Arc::new(geocoder), &GeocodingConfig::default())
    }

    #[tokio::test]
    async fn resolve_uses_provider_address() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .returning(|_, _| Ok("221B Baker Street, London".to_string()));

        let location = resolver(geocoder).resolve(51.5237, -0.1585).await;
        assert_eq!(location.address, "221B Baker Street, London");
        assert_eq!(location.latitude, 51.5237);
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_coordinates() {
        let mut geocoder = MockReverseGeocoder::new();
        geocoder
            .expect_reverse()
            .returning(|_, _| Err(AppError::Degraded("Reverse geocoding".to_string())));

        let location = resolver(geocoder).resolve(28.61393, 77.20902).await;
        assert_eq!(location.address, "Location: 28.6139, 77.2090");
    }

    #[test]
    fn manual_entry_never_leaves_address_empty() {
        let resolver = resolver(MockReverseGeocoder::new());
        let typed = resolver.manual(12.9716, 77.5946, "  MG Road, Bengaluru ");
        assert_eq!(typed.address, "MG Road, Bengaluru");

        let empty = resolver.manual(12.9716, 77.5946, "   ");
        assert_eq!(empty.address, "Location: 12.9716, 77.5946");
    }

    #[test]
    fn availability_toggles_through_retry() {
        let mut resolver = resolver(MockReverseGeocoder::new());
        assert_eq!(resolver.availability(), MapAvailability::Ready);
        resolver.mark_unavailable();
        assert_eq!(resolver.availability(), MapAvailability::Unavailable);
        resolver.retry_init();
        assert_eq!(resolver.availability(), MapAvailability::Ready);
    }
}
