//! Cached user profile

use serde::{Deserialize, Serialize};

/// Profile fields cached at login and used to fill contact defaults
/// the disposal form does not collect separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
}
