use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};

use crate::error::CliError;

use super::interface::HttpClient;
use super::types::{
    BookRecord, HealthStatus, LoginPayload, RefreshedAccess, RegisterPayload,
    SerializableLoginPayload, SerializableRegisterPayload, TokenPair,
};
use super::util::{api_error, books_url, build_url, handle_response, handle_text_response};

/// Wrapper around `ReqwestClient` implementing the [`HttpClient`] trait
/// against a `host:port` base.
pub struct ReqwestClientWrapper {
    client: ReqwestClient,
    base_url: String,
}

impl ReqwestClientWrapper {
    pub fn new(client: ReqwestClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl HttpClient for ReqwestClientWrapper {
    async fn register(&self, credentials: &RegisterPayload) -> Result<String, CliError> {
        let url = build_url(&self.base_url, "/register")?;
        tracing::info!(%url, username = %credentials.username, "attempting registration");
        let response = self
            .client
            .post(url)
            .json(&SerializableRegisterPayload::from(credentials))
            .send()
            .await
            .map_err(CliError::Reqwest)?;
        handle_text_response(response)
            .await
            .map_err(|e| CliError::RegistrationFailed(e.to_string()))
    }

    async fn login(&self, credentials: &LoginPayload) -> Result<TokenPair, CliError> {
        let url = build_url(&self.base_url, "/login")?;
        tracing::info!(%url, username = %credentials.username, "attempting login");
        let response = self
            .client
            .post(url)
            .json(&SerializableLoginPayload::from(credentials))
            .send()
            .await
            .map_err(CliError::Reqwest)?;
        handle_response(response)
            .await
            .map_err(|e| CliError::AuthFailed(e.to_string()))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, CliError> {
        let url = build_url(&self.base_url, "/refresh")?;
        tracing::info!(%url, "refreshing access token");
        let response = self
            .client
            .post(url)
            .bearer_auth(refresh_token)
            .send()
            .await
            .map_err(CliError::Reqwest)?;
        handle_response(response).await
    }

    async fn protected(&self, access_token: &str) -> Result<String, CliError> {
        let url = build_url(&self.base_url, "/protected")?;
        tracing::info!(%url, "calling protected endpoint");
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(CliError::Reqwest)?;
        handle_text_response(response).await
    }

    async fn search_books(
        &self,
        access_token: &str,
        query: &str,
    ) -> Result<Vec<BookRecord>, CliError> {
        let url = books_url(&self.base_url, query)?;
        tracing::info!(%url, "searching catalog");
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(CliError::Reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(CliError::Reqwest)?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        // A 2xx body that is not a JSON array counts as zero results, not a
        // failure.
        match serde_json::from_str::<Vec<BookRecord>>(&body) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(error = %e, "catalog response was not a JSON array, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn health_check(&self) -> Result<HealthStatus, CliError> {
        let url = build_url(&self.base_url, "/")?;
        let response = self.client.get(url).send().await.map_err(CliError::Reqwest)?;
        Ok(HealthStatus {
            healthy: response.status() == StatusCode::OK,
        })
    }
}
