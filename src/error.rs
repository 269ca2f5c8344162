/// Custom Error type for the CLI client.
///
/// Every operation resolves to either its success payload or one of these
/// variants, so callers and tests match on outcomes instead of parsing log
/// text.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API returned an error: status={status}, message={message}")]
    ApiError {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("Authentication failed: {0}")]
    AuthFailed(String),
    #[error("Registration failed: {0}")]
    RegistrationFailed(String),
    #[error("Invalid input: {0}")]
    InputError(String),
    #[error("Internal client error: {0}")]
    Internal(String),
}
