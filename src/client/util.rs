use crate::error::CliError;
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Join an API path to the configured base. The base is the literal
/// `host:port` concatenation, so a scheme-less host fails here as a parse
/// error rather than producing a malformed request.
pub(super) fn build_url(base: &str, path: &str) -> Result<Url, CliError> {
    Url::parse(&format!("{base}{path}")).map_err(CliError::UrlParse)
}

/// URL for the catalog search. An empty query yields bare `/books` with no
/// query string at all; otherwise `q` is appended percent-encoded.
pub(super) fn books_url(base: &str, query: &str) -> Result<Url, CliError> {
    let mut url = build_url(base, "/books")?;
    if !query.is_empty() {
        url.query_pairs_mut().append_pair("q", query);
    }
    Ok(url)
}

/// Decode a JSON success body into `T`, or map a non-2xx answer to
/// [`CliError::ApiError`] carrying the server's message.
pub(super) async fn handle_response<T: DeserializeOwned>(
    response: Response,
) -> Result<T, CliError> {
    let status = response.status();
    let body = response.text().await.map_err(CliError::Reqwest)?;
    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(%status, body = %body, error = %e, "failed to deserialize response body");
            CliError::Json(e)
        })
    } else {
        Err(api_error(status, &body))
    }
}

/// Like [`handle_response`] but for endpoints whose success body is arbitrary
/// text that is only ever displayed.
pub(super) async fn handle_text_response(response: Response) -> Result<String, CliError> {
    let status = response.status();
    let body = response.text().await.map_err(CliError::Reqwest)?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(api_error(status, &body))
    }
}

pub(super) fn api_error(status: StatusCode, body: &str) -> CliError {
    // The service reports errors as {"msg": ...} (flask-jwt convention) or
    // {"error": ...}; fall back to the raw body when neither parses.
    #[derive(Deserialize)]
    struct ErrorBody {
        msg: Option<String>,
        error: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg.or(b.error))
        .unwrap_or_else(|| body.trim().to_string());
    CliError::ApiError { status, message }
}
