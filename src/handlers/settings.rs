use crate::error::CliError;
use crate::io::IoHandler;
use crate::session::Session;

/// Handler function for editing the service endpoint. Persists immediately;
/// the caller is responsible for rebuilding its HTTP client against the new
/// base URL.
pub fn handle_server_settings_action<IO: IoHandler>(
    session: &mut Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    io_handler.write_line(&format!(
        "\nCurrent endpoint: {}",
        session.config().base_url()
    ))?;
    let host = io_handler.read_line("Host (with scheme, e.g. http://127.0.0.1):")?;
    let port_text = io_handler.read_line("Port:")?;

    if host.is_empty() {
        return Err(CliError::InputError("Host must not be empty.".into()));
    }
    let port: u16 = port_text
        .parse()
        .map_err(|_| CliError::InputError(format!("Invalid port: {port_text}")))?;

    session.update_endpoint(host, port);
    io_handler.write_line(&format!("Endpoint saved: {}", session.config().base_url()))?;
    Ok(())
}
