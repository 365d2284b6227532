//! Data models for the ECycle client

pub mod device;
pub mod draft;
pub mod enums;
pub mod request;
pub mod user;

// Re-export commonly used types
pub use device::{Device, QrSnapshot, SelectedDevice};
pub use draft::DisposalDraft;
pub use enums::{DeviceCondition, DisposalStatus, PreferredTimeSlot, SortDirection, SortKey};
pub use request::{ApiEnvelope, DisposalRequest, NewDisposalRequest, StatusUpdate};
pub use user::UserProfile;
