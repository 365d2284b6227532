//! Device selection state for a disposal draft

use indexmap::IndexMap;

use crate::models::device::{Device, SelectedDevice};

/// Insertion-ordered set of devices attached to a draft, keyed by device id.
#[derive(Debug, Clone, Default)]
pub struct DeviceSelection {
    entries: IndexMap<String, SelectedDevice>,
}

impl DeviceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a device in or out of the selection. Adding snapshots the
    /// QR-relevant fields at this moment; removing discards the snapshot,
    /// so a re-toggle always captures a fresh one. Returns whether the
    /// device is selected afterwards.
    pub fn toggle(&mut self, device: &Device) -> bool {
        if self.entries.shift_remove(&device.id).is_some() {
            false
        } else {
            self.entries
                .insert(device.id.clone(), SelectedDevice::select(device));
            true
        }
    }

    pub fn contains(&self, device_id: &str) -> bool {
        self.entries.contains_key(device_id)
    }

    /// Selected entries in insertion order.
    pub fn selected(&self) -> Vec<SelectedDevice> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Case-insensitive substring filter over the catalog by name, type, brand,
/// or id. Pure: the selection itself is untouched.
pub fn filter<'a>(catalog: &'a [Device], term: &str) -> Vec<&'a Device> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|device| {
            device.name.to_lowercase().contains(&needle)
                || device.device_type.to_lowercase().contains(&needle)
                || device
                    .brand
                    .as_deref()
                    .map_or(false, |brand| brand.to_lowercase().contains(&needle))
                || device.id.to_lowercase().contains(&needle)
        })
        .collect()
}
