//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DisposalStatus
// ---------------------------------------------------------------------------

/// Disposal request lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisposalStatus {
    Pending,
    Approved,
    InProgress,
    PickupScheduled,
    OutForPickup,
    PickupCompleted,
    Completed,
    Rejected,
    Cancelled,
}

impl DisposalStatus {
    /// All states, in lifecycle order. Drives the status dropdown.
    pub const ALL: [DisposalStatus; 9] = [
        DisposalStatus::Pending,
        DisposalStatus::Approved,
        DisposalStatus::InProgress,
        DisposalStatus::PickupScheduled,
        DisposalStatus::OutForPickup,
        DisposalStatus::PickupCompleted,
        DisposalStatus::Completed,
        DisposalStatus::Rejected,
        DisposalStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisposalStatus::Pending => "pending",
            DisposalStatus::Approved => "approved",
            DisposalStatus::InProgress => "in_progress",
            DisposalStatus::PickupScheduled => "pickup_scheduled",
            DisposalStatus::OutForPickup => "out_for_pickup",
            DisposalStatus::PickupCompleted => "pickup_completed",
            DisposalStatus::Completed => "completed",
            DisposalStatus::Rejected => "rejected",
            DisposalStatus::Cancelled => "cancelled",
        }
    }

    /// Fixed color token for the status chip.
    pub fn chip_color(&self) -> &'static str {
        match self {
            DisposalStatus::Pending => "amber",
            DisposalStatus::Approved => "blue",
            DisposalStatus::InProgress => "violet",
            DisposalStatus::PickupScheduled => "teal",
            DisposalStatus::OutForPickup => "indigo",
            DisposalStatus::PickupCompleted => "cyan",
            DisposalStatus::Completed => "green",
            DisposalStatus::Rejected => "red",
            DisposalStatus::Cancelled => "slate",
        }
    }

    /// Human-readable label for chips and dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            DisposalStatus::Pending => "Pending",
            DisposalStatus::Approved => "Approved",
            DisposalStatus::InProgress => "In Progress",
            DisposalStatus::PickupScheduled => "Pickup Scheduled",
            DisposalStatus::OutForPickup => "Out for Pickup",
            DisposalStatus::PickupCompleted => "Pickup Completed",
            DisposalStatus::Completed => "Completed",
            DisposalStatus::Rejected => "Rejected",
            DisposalStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for DisposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DisposalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(DisposalStatus::Pending),
            "approved" => Ok(DisposalStatus::Approved),
            "in_progress" => Ok(DisposalStatus::InProgress),
            "pickup_scheduled" => Ok(DisposalStatus::PickupScheduled),
            "out_for_pickup" => Ok(DisposalStatus::OutForPickup),
            "pickup_completed" => Ok(DisposalStatus::PickupCompleted),
            "completed" => Ok(DisposalStatus::Completed),
            "rejected" => Ok(DisposalStatus::Rejected),
            "cancelled" => Ok(DisposalStatus::Cancelled),
            _ => Err(format!("Invalid disposal status: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// PreferredTimeSlot
// ---------------------------------------------------------------------------

/// The four bookable pickup windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredTimeSlot {
    #[serde(rename = "9:00 AM - 11:00 AM")]
    Morning,
    #[serde(rename = "11:00 AM - 1:00 PM")]
    Midday,
    #[serde(rename = "2:00 PM - 4:00 PM")]
    Afternoon,
    #[serde(rename = "4:00 PM - 6:00 PM")]
    Evening,
}

impl PreferredTimeSlot {
    pub const ALL: [PreferredTimeSlot; 4] = [
        PreferredTimeSlot::Morning,
        PreferredTimeSlot::Midday,
        PreferredTimeSlot::Afternoon,
        PreferredTimeSlot::Evening,
    ];

    /// The wire/display label; slots travel as their window string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredTimeSlot::Morning => "9:00 AM - 11:00 AM",
            PreferredTimeSlot::Midday => "11:00 AM - 1:00 PM",
            PreferredTimeSlot::Afternoon => "2:00 PM - 4:00 PM",
            PreferredTimeSlot::Evening => "4:00 PM - 6:00 PM",
        }
    }
}

impl std::fmt::Display for PreferredTimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PreferredTimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "9:00 AM - 11:00 AM" => Ok(PreferredTimeSlot::Morning),
            "11:00 AM - 1:00 PM" => Ok(PreferredTimeSlot::Midday),
            "2:00 PM - 4:00 PM" => Ok(PreferredTimeSlot::Afternoon),
            "4:00 PM - 6:00 PM" => Ok(PreferredTimeSlot::Evening),
            _ => Err(format!("Invalid time slot: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// DeviceCondition
// ---------------------------------------------------------------------------

/// Physical condition of a registered device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Damaged,
}

impl DeviceCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCondition::Excellent => "excellent",
            DeviceCondition::Good => "good",
            DeviceCondition::Fair => "fair",
            DeviceCondition::Poor => "poor",
            DeviceCondition::Damaged => "damaged",
        }
    }
}

impl std::fmt::Display for DeviceCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sortable columns of the request list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CreatedAt,
    Status,
    Department,
    Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_snake_case() {
        for status in DisposalStatus::ALL {
            let parsed: DisposalStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("picked_up".parse::<DisposalStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_wire_names() {
        let json = serde_json::to_string(&DisposalStatus::OutForPickup).unwrap();
        assert_eq!(json, "\"out_for_pickup\"");
        let back: DisposalStatus = serde_json::from_str("\"pickup_scheduled\"").unwrap();
        assert_eq!(back, DisposalStatus::PickupScheduled);
    }

    #[test]
    fn time_slot_parses_the_four_windows_only() {
        for slot in PreferredTimeSlot::ALL {
            let parsed: PreferredTimeSlot = slot.as_str().parse().unwrap();
            assert_eq!(parsed, slot);
        }
        assert!("8:00 AM - 10:00 AM".parse::<PreferredTimeSlot>().is_err());
    }

    #[test]
    fn time_slot_serializes_as_window_label() {
        let json = serde_json::to_string(&PreferredTimeSlot::Morning).unwrap();
        assert_eq!(json, "\"9:00 AM - 11:00 AM\"");
    }

    #[test]
    fn every_status_has_a_chip_color() {
        let mut seen = std::collections::HashSet::new();
        for status in DisposalStatus::ALL {
            assert!(!status.chip_color().is_empty());
            seen.insert(status.chip_color());
        }
        // the mapping is fixed and distinct per status
        assert_eq!(seen.len(), DisposalStatus::ALL.len());
    }
}
