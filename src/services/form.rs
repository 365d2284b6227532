//! Disposal request form controller
//!
//! Aggregates device selection, location, contact, and scheduling fields
//! into one draft; validates on submit attempt; normalizes and POSTs the
//! payload. Every failure path keeps the typed field values; the only
//! full reset happens after a successful submit.

use std::sync::Arc;

use crate::{
    client::disposal::DisposalApi,
    error::{AppError, AppResult, FieldErrors},
    models::draft::DisposalDraft,
    models::request::DisposalRequest,
    models::user::UserProfile,
};

use super::location::ResolvedLocation;
use super::selection::DeviceSelection;

/// Linear submission lifecycle. `Validating` and `Submitting` are
/// transient; a failed attempt lands back in `Editing` with errors set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
    Succeeded,
}

pub struct DisposalForm {
    api: Arc<dyn DisposalApi>,
    profile: UserProfile,
    draft: DisposalDraft,
    phase: FormPhase,
    errors: FieldErrors,
}

impl DisposalForm {
    pub fn new(api: Arc<dyn DisposalApi>, profile: UserProfile) -> Self {
        Self::with_draft(api, profile, DisposalDraft::default())
    }

    /// Start from a seeded draft (edit flow).
    pub fn with_draft(
        api: Arc<dyn DisposalApi>,
        profile: UserProfile,
        draft: DisposalDraft,
    ) -> Self {
        Self {
            api,
            profile,
            draft,
            phase: FormPhase::Editing,
            errors: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &DisposalDraft {
        &self.draft
    }

    /// Field-by-field mutation between submit attempts.
    pub fn draft_mut(&mut self) -> &mut DisposalDraft {
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
        &mut self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Copy the current device selection into the draft.
    pub fn sync_selection(&mut self, selection: &DeviceSelection) {
        self.draft.selected_devices = selection.selected();
    }

    /// Adopt a resolved pickup point: coordinates and the reconciled
    /// address field in one step.
    pub fn apply_location(&mut self, location: ResolvedLocation) {
        self.draft.latitude = Some(location.latitude);
        self.draft.longitude = Some(location.longitude);
        self.draft.pickup_address = location.address;
    }

    /// Validate and submit the draft.
    ///
    /// Validation failure populates the field-error map and never reaches
    /// the network. Backend rejection is surfaced under the `submission`
    /// key with the draft untouched. Success resets the draft and returns
    /// the created record.
    pub async fn submit(&mut self) -> AppResult<DisposalRequest> {
        if self.phase == FormPhase::Submitting {
            return Err(AppError::Internal(
                "a submission is already in flight".to_string(),
            ));
        }

        self.phase = FormPhase::Validating;
        self.errors = FieldErrors::new();

        let payload = match self.draft.normalize(&self.profile) {
            Ok(payload) => payload,
            Err(field_errors) => {
                self.errors = field_errors.clone();
                self.phase = FormPhase::Editing;
                return Err(AppError::Validation(field_errors));
            }
        };

        self.phase = FormPhase::Submitting;
        tracing::info!(
            item_count = payload.item_count,
            department = %payload.department,
            "submitting disposal request"
        );

        match self.api.submit(&payload).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "disposal request created");
                self.phase = FormPhase::Succeeded;
                self.draft = DisposalDraft::default();
                Ok(created)
            }
            Err(error) => {
                tracing::warn!(%error, "disposal request submission failed");
                self.errors.insert("submission", error.to_string());
                self.phase = FormPhase::Editing;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, Utc};

    use super::*;
    use crate::client::disposal::MockDisposalApi;
    use crate::models::device::{Device, SelectedDevice};
    use crate::models::enums::{DeviceCondition, DisposalStatus, PreferredTimeSlot};
    use crate::models::request::NewDisposalRequest;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha Verma".to_string(),
            email: "asha.verma@example.edu".to_string(),
            phone: None,
            department: "Computer Science".to_string(),
        }
    }

    fn device(id: &str, name: &str, device_type: &str, brand: &str) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
            device_type: device_type.to_string(),
            brand: Some(brand.to_string()),
            model: None,
            serial_number: None,
            condition: DeviceCondition::Poor,
            location: None,
            qr_data: None,
            created_at: None,
        }
    }

    fn valid_draft() -> DisposalDraft {
        DisposalDraft {
            selected_devices: vec![
                SelectedDevice::select(&device("d1", "DellLaptop", "Laptop", "Dell")),
                SelectedDevice::select(&device("d2", "HPPrinter", "Printer", "HP")),
            ],
            pickup_address: "Block C, Campus Road".to_string(),
            contact_phone: "9876543210".to_string(),
            latitude: Some(28.6139),
            longitude: Some(77.209),
            preferred_date: (Local::now().date_naive() + Duration::days(1))
                .format("%Y-%m-%d")
                .to_string(),
            preferred_time_slot: Some(PreferredTimeSlot::Morning),
            special_instructions: String::new(),
            weight_kg: String::new(),
            estimated_value: String::new(),
        }
    }

    fn created_from(payload: &NewDisposalRequest) -> DisposalRequest {
        DisposalRequest {
            id: "req-42".to_string(),
            status: DisposalStatus::Pending,
            department: payload.department.clone(),
            contact_name: payload.contact_name.clone(),
            contact_phone: payload.contact_phone.clone(),
            contact_email: payload.contact_email.clone(),
            pickup_address: payload.pickup_address.clone(),
            latitude: payload.latitude,
            longitude: payload.longitude,
            e_waste_description: payload.e_waste_description.clone(),
            weight_kg: payload.weight_kg,
            estimated_value: payload.estimated_value,
            item_count: payload.item_count,
            preferred_date: payload.preferred_date,
            preferred_time_slot: payload.preferred_time_slot,
            additional_notes: payload.additional_notes.clone(),
            vendor_notes: None,
            responses: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_network() {
        // no expectations registered: any gateway call would panic
        let api = MockDisposalApi::new();
        let mut form = DisposalForm::new(Arc::new(api), profile());

        let result = form.submit().await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!form.errors().is_empty());
        assert!(form.errors().get("devices").is_some());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn successful_submit_normalizes_and_resets() {
        let mut api = MockDisposalApi::new();
        api.expect_submit()
            .times(1)
            .withf(|payload| {
                payload.e_waste_description
                    == "Laptop - DellLaptop (Dell); Printer - HPPrinter (HP)"
                    && payload.item_count == 2
            })
            .returning(|payload| Ok(created_from(payload)));

        let mut form = DisposalForm::with_draft(Arc::new(api), profile(), valid_draft());
        let created = form.submit().await.unwrap();

        assert_eq!(created.id, "req-42");
        assert_eq!(form.phase(), FormPhase::Succeeded);
        // intentional full reset after success
        assert!(form.draft().selected_devices.is_empty());
        assert!(form.draft().pickup_address.is_empty());
    }

    #[tokio::test]
    async fn backend_rejection_preserves_the_draft() {
        let mut api = MockDisposalApi::new();
        api.expect_submit().times(1).returning(|_| {
            Err(AppError::Backend {
                status: 400,
                message: "contact_email is malformed".to_string(),
            })
        });

        let mut form = DisposalForm::with_draft(Arc::new(api), profile(), valid_draft());
        let result = form.submit().await;

        assert!(matches!(result, Err(AppError::Backend { .. })));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form
            .errors()
            .get("submission")
            .unwrap()
            .contains("contact_email is malformed"));
        // no data loss on failed submit
        assert_eq!(form.draft().selected_devices.len(), 2);
        assert_eq!(form.draft().contact_phone, "9876543210");
    }

    #[tokio::test]
    async fn apply_location_fills_coordinates_and_address() {
        let api = MockDisposalApi::new();
        let mut form = DisposalForm::new(Arc::new(api), profile());

        form.apply_location(ResolvedLocation {
            latitude: 12.9716,
            longitude: 77.5946,
            address: "MG Road, Bengaluru".to_string(),
        });

        assert_eq!(form.draft().latitude, Some(12.9716));
        assert_eq!(form.draft().pickup_address, "MG Road, Bengaluru");
    }
}
