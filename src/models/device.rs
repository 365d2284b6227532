//! Device model and selection snapshot types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::DeviceCondition;

/// Registered device as returned by the backend. Read-only on this side;
/// the disposal workflow references devices but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    /// Open string set ("Laptop", "Desktop", "Smartphone", ...)
    pub device_type: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub condition: DeviceCondition,
    pub location: Option<String>,
    /// Opaque deep-link payload for the public profile view.
    pub qr_data: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// QR-relevant device fields, frozen at selection time.
///
/// A value copy: edits to the underlying device after selection do not
/// reach a draft already carrying the snapshot. Re-selecting captures a
/// fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrSnapshot {
    pub device_id: String,
    pub name: String,
    pub device_type: String,
    pub brand: Option<String>,
    pub qr_data: Option<String>,
}

impl QrSnapshot {
    pub fn capture(device: &Device) -> Self {
        Self {
            device_id: device.id.clone(),
            name: device.name.clone(),
            device_type: device.device_type.clone(),
            brand: device.brand.clone(),
            qr_data: device.qr_data.clone(),
        }
    }
}

/// A device attached to a disposal draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedDevice {
    pub device: Device,
    pub snapshot: QrSnapshot,
}

impl SelectedDevice {
    pub fn select(device: &Device) -> Self {
        Self {
            snapshot: QrSnapshot::capture(device),
            device: device.clone(),
        }
    }

    /// One segment of the request's e-waste description:
    /// `"{type} - {name} ({brand})"`, brand omitted when absent.
    pub fn description_segment(&self) -> String {
        match &self.snapshot.brand {
            Some(brand) => format!(
                "{} - {} ({})",
                self.snapshot.device_type, self.snapshot.name, brand
            ),
            None => format!("{} - {}", self.snapshot.device_type, self.snapshot.name),
        }
    }
}
