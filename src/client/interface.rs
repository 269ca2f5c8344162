use crate::error::CliError;
use async_trait::async_trait;

use super::types::{BookRecord, HealthStatus, LoginPayload, RefreshedAccess, RegisterPayload, TokenPair};

/// Trait for abstracting HTTP client interactions to allow mocking in tests.
///
/// Bearer tokens are passed in by the caller per call; the client never
/// attaches credentials on its own.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `/register`. The success body is arbitrary text, returned for
    /// display only; registration does not yield tokens in this protocol.
    async fn register(&self, credentials: &RegisterPayload) -> Result<String, CliError>;

    /// POST `/login`. On 200 the token pair is parsed with absent fields
    /// defaulting to `""`.
    async fn login(&self, credentials: &LoginPayload) -> Result<TokenPair, CliError>;

    /// POST `/refresh` with the refresh token as bearer auth and no body.
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, CliError>;

    /// GET `/protected` with the access token as bearer auth; success body is
    /// arbitrary text.
    async fn protected(&self, access_token: &str) -> Result<String, CliError>;

    /// GET `/books` (or `/books?q=<query>` when `query` is non-empty) with
    /// the access token as bearer auth. A malformed 2xx body degrades to an
    /// empty result set.
    async fn search_books(
        &self,
        access_token: &str,
        query: &str,
    ) -> Result<Vec<BookRecord>, CliError>;

    /// GET `/` with no auth header; any HTTP answer maps to a status,
    /// healthy only on 200.
    async fn health_check(&self) -> Result<HealthStatus, CliError>;
}
