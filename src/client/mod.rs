//! Typed REST access to the ECycle backend
//!
//! Thin layer over reqwest: attaches the bearer token from the session,
//! unwraps the `{success, data, ...}` envelope every endpoint uses, and
//! maps failure shapes onto the [`AppError`] taxonomy. A 401 from any
//! endpoint expires the session before the error is surfaced.

pub mod devices;
pub mod disposal;
pub mod geocoding;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    config::BackendConfig,
    error::{AppError, AppResult},
    models::request::ApiEnvelope,
    session::Session,
};

/// Gateway holding the per-resource clients
#[derive(Clone)]
pub struct ApiClient {
    pub devices: devices::DevicesClient,
    pub disposal: disposal::DisposalClient,
}

impl ApiClient {
    pub fn new(config: &BackendConfig, session: Arc<Session>) -> AppResult<Self> {
        let transport = Transport::new(config, session)?;
        Ok(Self {
            devices: devices::DevicesClient::new(transport.clone()),
            disposal: disposal::DisposalClient::new(transport),
        })
    }
}

/// Request plumbing shared by the resource clients
#[derive(Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
    session: Arc<Session>,
}

impl Transport {
    fn new(config: &BackendConfig, session: Arc<Session>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AppError::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(path, self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(path, self.http.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(path, self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(path, self.http.put(self.url(path)).json(body))
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await.map_err(AppError::Network)?;
        self.unwrap_envelope(path, response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> AppResult<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "backend returned 401, expiring session");
            self.session.mark_expired();
            return Err(AppError::AuthExpired);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
                .map(|envelope| envelope.rejection_message())
                .unwrap_or_else(|_| {
                    if body.is_empty() {
                        "Request rejected".to_string()
                    } else {
                        body
                    }
                });
            tracing::debug!(path, status = status.as_u16(), "backend rejected request");
            return Err(AppError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(AppError::Network)?;
        if !envelope.success {
            return Err(AppError::Backend {
                status: status.as_u16(),
                message: envelope.rejection_message(),
            });
        }

        envelope
            .data
            .ok_or_else(|| AppError::Internal(format!("{}: response envelope missing data", path)))
    }
}
