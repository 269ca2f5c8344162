use crate::client::HttpClient;
use crate::error::CliError;
use crate::io::IoHandler;

/// Handler function for the health check action.
///
/// Transport errors count as unhealthy rather than propagating; the returned
/// boolean is the derived signal.
pub async fn handle_health_check_action<Http: HttpClient, IO: IoHandler>(
    client: &Http,
    io_handler: &mut IO,
) -> Result<bool, CliError> {
    io_handler.write_line("\nChecking service health...")?;
    let healthy = match client.health_check().await {
        Ok(status) => status.healthy,
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            false
        }
    };
    if healthy {
        io_handler.write_line("Service status: up")?;
    } else {
        io_handler.write_line("Service status: DOWN")?;
    }
    Ok(healthy)
}
