use crate::client::{HttpClient, LoginPayload, RegisterPayload};
use crate::error::CliError;
use crate::io::IoHandler;
use crate::session::Session;
use secrecy::SecretString;

/// Handler function for the login action.
pub async fn handle_login_action<Http: HttpClient, IO: IoHandler>(
    client: &Http,
    session: &mut Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    io_handler.write_line("\nPlease log in.")?;
    let username = io_handler.read_line("Username:")?;
    let password = io_handler.read_line("Password:")?;

    if username.is_empty() || password.is_empty() {
        return Err(CliError::InputError(
            "Username and password must not be empty.".into(),
        ));
    }

    let credentials = LoginPayload {
        username,
        password: SecretString::new(password.into_boxed_str()),
    };
    session.login(client, &credentials).await
}

/// Handler function for the registration action.
pub async fn handle_registration_action<Http: HttpClient, IO: IoHandler>(
    client: &Http,
    session: &Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    io_handler.write_line("\nPlease register a new user.")?;
    let username = io_handler.read_line("Choose Username:")?;
    let email = io_handler.read_line("Enter Email:")?;
    let password = io_handler.read_line("Choose Password:")?;

    if username.len() < 3 {
        return Err(CliError::InputError(
            "Username must be at least 3 characters long.".into(),
        ));
    }
    if password.len() < 8 {
        return Err(CliError::InputError(
            "Password must be at least 8 characters long.".into(),
        ));
    }

    let credentials = RegisterPayload {
        username,
        email,
        password: SecretString::new(password.into_boxed_str()),
    };

    let body = session.register(client, &credentials).await?;
    io_handler.write_line(&format!("Server response: {}", body.trim()))?;
    io_handler.write_line("You can now log in.")?;
    Ok(())
}

/// Clear the stored session. Pure local mutation; cannot fail remotely.
pub fn handle_logout_action<IO: IoHandler>(
    session: &mut Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    session.logout();
    io_handler.write_line("Session cleared.")?;
    Ok(())
}

/// Display the stored token pair.
pub fn handle_show_tokens_action<IO: IoHandler>(
    session: &Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    io_handler.write_line(&format!("Access={}", session.config().access_token))?;
    io_handler.write_line(&format!("Refresh={}", session.config().refresh_token))?;
    Ok(())
}
