//! Client-local disposal request draft
//!
//! A mutable aggregate composed field-by-field by the form, validated on
//! submit attempt, and normalized into the exact payload shape the backend
//! expects. Numeric inputs arrive as raw strings and are only parsed here.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::error::FieldErrors;

use super::device::SelectedDevice;
use super::enums::PreferredTimeSlot;
use super::request::{DisposalRequest, NewDisposalRequest};
use super::user::UserProfile;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Disposal request draft; client-only, discarded on successful submit.
#[derive(Debug, Clone, Default, Validate)]
pub struct DisposalDraft {
    /// Ordered selection, set semantics by device id (owned by
    /// `services::selection`, synced in before submit).
    pub selected_devices: Vec<SelectedDevice>,
    /// Resolved from the map or typed manually; one reconciled field.
    #[validate(length(min = 1, message = "Pickup address is required"))]
    pub pickup_address: String,
    #[validate(regex(
        path = *PHONE_RE,
        message = "Contact phone must be exactly 10 digits"
    ))]
    pub contact_phone: String,
    /// Present together or absent together.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Raw `YYYY-MM-DD` input; parsed during validation.
    pub preferred_date: String,
    pub preferred_time_slot: Option<PreferredTimeSlot>,
    pub special_instructions: String,
    /// Raw numeric inputs; empty normalizes to `null`.
    pub weight_kg: String,
    pub estimated_value: String,
}

/// Validated view of a draft, with parsed fields.
struct CheckedDraft<'a> {
    devices: &'a [SelectedDevice],
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    slot: PreferredTimeSlot,
    weight_kg: Option<f64>,
    estimated_value: Option<f64>,
}

impl DisposalDraft {
    /// Seed a draft from an existing request (edit flow). Device
    /// attachments cannot be reconstructed from the stored description and
    /// must be reselected.
    pub fn from_request(request: &DisposalRequest) -> Self {
        Self {
            selected_devices: Vec::new(),
            pickup_address: request.pickup_address.clone(),
            contact_phone: request.contact_phone.clone(),
            latitude: Some(request.latitude),
            longitude: Some(request.longitude),
            preferred_date: request.preferred_date.format("%Y-%m-%d").to_string(),
            preferred_time_slot: Some(request.preferred_time_slot),
            special_instructions: request.additional_notes.clone().unwrap_or_default(),
            weight_kg: request.weight_kg.map(|w| w.to_string()).unwrap_or_default(),
            estimated_value: request
                .estimated_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Synchronous submit-gate validation. Returns the full field error
    /// map; an `Err` here must never reach the network.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.check(chrono::Local::now().date_naive()).map(|_| ())
    }

    /// Normalize into the backend payload. Runs validation first; contact
    /// and department defaults come from the cached profile.
    pub fn normalize(&self, profile: &UserProfile) -> Result<NewDisposalRequest, FieldErrors> {
        let checked = self.check(chrono::Local::now().date_naive())?;

        let e_waste_description = checked
            .devices
            .iter()
            .map(SelectedDevice::description_segment)
            .collect::<Vec<_>>()
            .join("; ");

        Ok(NewDisposalRequest {
            department: profile.department.clone(),
            contact_name: profile.name.clone(),
            contact_phone: self.contact_phone.clone(),
            contact_email: profile.email.clone(),
            pickup_address: self.pickup_address.trim().to_string(),
            latitude: checked.latitude,
            longitude: checked.longitude,
            e_waste_description,
            weight_kg: checked.weight_kg,
            estimated_value: checked.estimated_value,
            item_count: checked.devices.len() as u32,
            preferred_date: checked.date,
            preferred_time_slot: checked.slot,
            additional_notes: none_if_empty(&self.special_instructions),
        })
    }

    fn check(&self, today: NaiveDate) -> Result<CheckedDraft<'_>, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.selected_devices.is_empty() {
            errors.insert("devices", "Select at least one device for pickup");
        }

        // shape rules (address, phone) come from the Validate derive
        if let Err(shape) = Validate::validate(self) {
            let field_errors = shape.field_errors();
            for field in ["pickup_address", "contact_phone"] {
                if let Some(first) = field_errors.get(field).and_then(|list| list.first()) {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field));
                    errors.insert(field, message);
                }
            }
        }

        let date = match self.preferred_date.trim() {
            "" => {
                errors.insert("preferred_date", "Preferred date is required");
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) if date < today => {
                    errors.insert("preferred_date", "Preferred date must be today or later");
                    None
                }
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert(
                        "preferred_date",
                        "Preferred date must be a valid date (YYYY-MM-DD)",
                    );
                    None
                }
            },
        };

        let slot = self.preferred_time_slot;
        if slot.is_none() {
            errors.insert("preferred_time_slot", "Select a pickup time slot");
        }

        let coordinates = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            _ => {
                errors.insert(
                    "coordinates",
                    "Pick the pickup point on the map or enter it manually",
                );
                None
            }
        };

        let weight_kg = match parse_optional_number(&self.weight_kg) {
            Ok(value) => value,
            Err(_) => {
                errors.insert("weight_kg", "Weight must be a number (kg)");
                None
            }
        };
        let estimated_value = match parse_optional_number(&self.estimated_value) {
            Ok(value) => value,
            Err(_) => {
                errors.insert("estimated_value", "Estimated value must be a number");
                None
            }
        };

        match (date, slot, coordinates) {
            (Some(date), Some(slot), Some((latitude, longitude))) if errors.is_empty() => {
                Ok(CheckedDraft {
                    devices: &self.selected_devices,
                    latitude,
                    longitude,
                    date,
                    slot,
                    weight_kg,
                    estimated_value,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_optional_number(input: &str) -> Result<Option<f64>, ()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|_| ())
}

fn none_if_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use super::*;
    use crate::models::device::{Device, SelectedDevice};
    use crate::models::enums::DeviceCondition;

    fn device(id: &str, name: &str, device_type: &str, brand: Option<&str>) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
            device_type: device_type.to_string(),
            brand: brand.map(str::to_string),
            model: None,
            serial_number: None,
            condition: DeviceCondition::Good,
            location: None,
            qr_data: None,
            created_at: None,
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha Verma".to_string(),
            email: "asha.verma@example.edu".to_string(),
            phone: None,
            department: "Computer Science".to_string(),
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn valid_draft() -> DisposalDraft {
        DisposalDraft {
            selected_devices: vec![
                SelectedDevice::select(&device("d1", "DellLaptop", "Laptop", Some("Dell"))),
                SelectedDevice::select(&device("d2", "HPPrinter", "Printer", Some("HP"))),
            ],
            pickup_address: "Block C, Campus Road, New Delhi".to_string(),
            contact_phone: "9876543210".to_string(),
            latitude: Some(28.6139),
            longitude: Some(77.209),
            preferred_date: (today() + Duration::days(1)).format("%Y-%m-%d").to_string(),
            preferred_time_slot: Some(PreferredTimeSlot::Morning),
            special_instructions: String::new(),
            weight_kg: String::new(),
            estimated_value: String::new(),
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = DisposalDraft::default().check(today()).err().unwrap();
        for field in [
            "devices",
            "pickup_address",
            "contact_phone",
            "preferred_date",
            "preferred_time_slot",
            "coordinates",
        ] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().check(today()).is_ok());
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        for bad in ["12345", "12345678901", "123-456-7890"] {
            let mut draft = valid_draft();
            draft.contact_phone = bad.to_string();
            let errors = draft.check(today()).err().unwrap();
            assert!(errors.get("contact_phone").is_some(), "{} should fail", bad);
        }

        let mut draft = valid_draft();
        draft.contact_phone = "1234567890".to_string();
        assert!(draft.check(today()).is_ok());
    }

    #[test]
    fn coordinates_must_come_as_a_pair() {
        let mut draft = valid_draft();
        draft.longitude = None;
        let errors = draft.check(today()).err().unwrap();
        assert!(errors.get("coordinates").is_some());
    }

    #[test]
    fn past_date_is_rejected_today_is_accepted() {
        let mut draft = valid_draft();
        draft.preferred_date = (today() - Duration::days(1)).format("%Y-%m-%d").to_string();
        let errors = draft.check(today()).err().unwrap();
        assert_eq!(
            errors.get("preferred_date"),
            Some("Preferred date must be today or later")
        );

        draft.preferred_date = today().format("%Y-%m-%d").to_string();
        assert!(draft.check(today()).is_ok());
    }

    #[test]
    fn unparseable_weight_is_a_field_error() {
        let mut draft = valid_draft();
        draft.weight_kg = "heavy".to_string();
        let errors = draft.check(today()).err().unwrap();
        assert!(errors.get("weight_kg").is_some());
    }

    #[test]
    fn normalize_concatenates_descriptions_and_counts_items() {
        let payload = valid_draft().normalize(&profile()).unwrap();
        assert_eq!(
            payload.e_waste_description,
            "Laptop - DellLaptop (Dell); Printer - HPPrinter (HP)"
        );
        assert_eq!(payload.item_count, 2);
        assert_eq!(payload.department, "Computer Science");
        assert_eq!(payload.contact_name, "Asha Verma");
        assert_eq!(payload.contact_email, "asha.verma@example.edu");
        assert_eq!(payload.weight_kg, None);
        assert_eq!(payload.additional_notes, None);
    }

    #[test]
    fn normalize_parses_optional_numerics() {
        let mut draft = valid_draft();
        draft.weight_kg = " 12.5 ".to_string();
        draft.estimated_value = "300".to_string();
        draft.special_instructions = "  gate 2, ask for security  ".to_string();
        let payload = draft.normalize(&profile()).unwrap();
        assert_eq!(payload.weight_kg, Some(12.5));
        assert_eq!(payload.estimated_value, Some(300.0));
        assert_eq!(
            payload.additional_notes.as_deref(),
            Some("gate 2, ask for security")
        );
    }

    #[test]
    fn seeded_draft_carries_scalar_fields() {
        let mut draft = valid_draft();
        draft.weight_kg = "4".to_string();
        let payload = draft.normalize(&profile()).unwrap();

        let request = DisposalRequest {
            id: "req-1".to_string(),
            status: crate::models::enums::DisposalStatus::Pending,
            department: payload.department,
            contact_name: payload.contact_name,
            contact_phone: payload.contact_phone,
            contact_email: payload.contact_email,
            pickup_address: payload.pickup_address.clone(),
            latitude: payload.latitude,
            longitude: payload.longitude,
            e_waste_description: payload.e_waste_description,
            weight_kg: payload.weight_kg,
            estimated_value: payload.estimated_value,
            item_count: payload.item_count,
            preferred_date: payload.preferred_date,
            preferred_time_slot: payload.preferred_time_slot,
            additional_notes: payload.additional_notes,
            vendor_notes: None,
            responses: Vec::new(),
            created_at: chrono::Utc::now(),
            updated_at: None,
        };

        let seeded = DisposalDraft::from_request(&request);
        assert_eq!(seeded.pickup_address, payload.pickup_address);
        assert_eq!(seeded.weight_kg, "4");
        assert!(seeded.selected_devices.is_empty());
    }
}
