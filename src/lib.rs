//! ECycle E-Waste Management Client
//!
//! Client-side workflow library for the ECycle e-waste / IT-asset management
//! backend: device catalog access, disposal request composition, validation
//! and submission, and the request lifecycle views, all over the backend's
//! REST API. Rendering is left to the embedding shell; this crate owns the
//! state machines underneath it.

use std::sync::Arc;

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::Session;

/// Client state shared across all workflow services
#[derive(Clone)]
pub struct ClientState {
    pub config: Arc<AppConfig>,
    pub session: Arc<Session>,
    pub services: services::Services,
}

impl ClientState {
    /// Wire up the session, API gateway, and workflow services.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let session = Arc::new(Session::new());
        let services = services::Services::new(&config, session.clone())?;
        Ok(Self {
            config: Arc::new(config),
            session,
            services,
        })
    }
}
