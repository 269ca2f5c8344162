use crate::client::{BookRecord, HttpClient, LoginPayload, RegisterPayload};
use crate::config::{ClientConfig, ConfigStore};
use crate::error::CliError;

/// Token lifecycle manager.
///
/// Owns the in-memory [`ClientConfig`] (the single source of truth for
/// subsequent requests) together with the store that persists it. Every token
/// mutation is followed by a persist; a failed persist is downgraded to a
/// logged warning so a read-only config file never fails an
/// otherwise-successful operation.
pub struct Session {
    config: ClientConfig,
    store: ConfigStore,
}

impl Session {
    pub fn new(config: ClientConfig, store: ConfigStore) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Logged-in is simply "access token non-empty". The server remains the
    /// sole arbiter of token validity, discovered reactively per call.
    pub fn is_logged_in(&self) -> bool {
        !self.config.access_token.is_empty()
    }

    /// Register a new user. Never touches stored tokens; the success body is
    /// returned for display.
    pub async fn register<C: HttpClient>(
        &self,
        client: &C,
        credentials: &RegisterPayload,
    ) -> Result<String, CliError> {
        client.register(credentials).await
    }

    /// Log in and store both tokens. On any failure the stored tokens are
    /// left untouched.
    pub async fn login<C: HttpClient>(
        &mut self,
        client: &C,
        credentials: &LoginPayload,
    ) -> Result<(), CliError> {
        let tokens = client.login(credentials).await?;
        self.config.access_token = tokens.access_token;
        self.config.refresh_token = tokens.refresh_token;
        self.persist();
        tracing::info!("tokens stored");
        Ok(())
    }

    /// Exchange the refresh token for a new access token. Only the access
    /// token is overwritten; the refresh token stays as-is. Failures leave
    /// state untouched.
    pub async fn refresh<C: HttpClient>(&mut self, client: &C) -> Result<(), CliError> {
        let refreshed = client.refresh(&self.config.refresh_token).await?;
        self.config.access_token = refreshed.access_token;
        self.persist();
        tracing::info!("access token updated");
        Ok(())
    }

    /// Call the protected endpoint with the current access token. Purely
    /// observational; no state mutation.
    pub async fn protected<C: HttpClient>(&self, client: &C) -> Result<String, CliError> {
        client.protected(&self.config.access_token).await
    }

    /// Search the catalog with the current access token.
    pub async fn search_books<C: HttpClient>(
        &self,
        client: &C,
        query: &str,
    ) -> Result<Vec<BookRecord>, CliError> {
        client.search_books(&self.config.access_token, query).await
    }

    /// Clear both tokens and persist. Pure local mutation, no network call,
    /// always succeeds.
    pub fn logout(&mut self) {
        self.config.access_token.clear();
        self.config.refresh_token.clear();
        self.persist();
        tracing::info!("session cleared");
    }

    /// Point the client at a different service instance and persist.
    pub fn update_endpoint(&mut self, host: String, port: u16) {
        self.config.host = host;
        self.config.port = port;
        self.persist();
        tracing::info!(base_url = %self.config.base_url(), "endpoint updated");
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.config) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %e,
                "failed to persist configuration"
            );
        }
    }
}
