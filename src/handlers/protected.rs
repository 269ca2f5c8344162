use crate::client::HttpClient;
use crate::error::CliError;
use crate::io::IoHandler;
use crate::session::Session;

/// Handler function for the protected-endpoint action. Observational only;
/// the response body is displayed and nothing else changes.
pub async fn handle_protected_action<Http: HttpClient, IO: IoHandler>(
    client: &Http,
    session: &Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    io_handler.write_line("\nCalling protected endpoint...")?;
    let body = session.protected(client).await?;
    io_handler.write_line(&format!("Response: {}", body.trim()))?;
    Ok(())
}
