//! Disposal request models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{DisposalStatus, PreferredTimeSlot};

/// Standard response wrapper used by every backend endpoint
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> ApiEnvelope<T> {
    /// Rejection text: the backend sends either a list of validation
    /// messages or a single message, never reliably both.
    pub fn rejection_message(&self) -> String {
        if !self.errors.is_empty() {
            self.errors.join("; ")
        } else {
            self.message
                .clone()
                .unwrap_or_else(|| "Request rejected".to_string())
        }
    }
}

/// Persisted disposal request as returned by the backend.
///
/// Immutable on this side except `status` and `vendor_notes`, which
/// round-trip through the status-update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisposalRequest {
    pub id: String,
    pub status: DisposalStatus,
    pub department: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub pickup_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub e_waste_description: String,
    pub weight_kg: Option<f64>,
    pub estimated_value: Option<f64>,
    pub item_count: u32,
    pub preferred_date: NaiveDate,
    pub preferred_time_slot: PreferredTimeSlot,
    pub additional_notes: Option<String>,
    pub vendor_notes: Option<String>,
    /// Vendor activity entries; populated on detail fetches only.
    #[serde(default)]
    pub responses: Vec<VendorResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Vendor activity entry nested in a detail response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorResponse {
    pub vendor_name: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// `POST /disposal/request` body. Optional numerics are serialized as
/// explicit `null` when empty, matching the backend contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDisposalRequest {
    pub department: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub pickup_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub e_waste_description: String,
    pub weight_kg: Option<f64>,
    pub estimated_value: Option<f64>,
    pub item_count: u32,
    pub preferred_date: NaiveDate,
    pub preferred_time_slot: PreferredTimeSlot,
    pub additional_notes: Option<String>,
}

/// `PUT /disposal/requests/{id}/status` body
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: DisposalStatus,
    pub vendor_notes: Option<String>,
}
