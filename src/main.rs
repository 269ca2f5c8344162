use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client as ReqwestClient;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use biblio_cli::handlers::*;
use biblio_cli::{ConfigStore, IoHandler, ReqwestClientWrapper, Session, StdIoHandler};

/// Terminal client for the JWT-authenticated books catalog service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the persisted configuration file
    #[arg(
        short,
        long,
        env = "BIBLIO_CONFIG",
        default_value = biblio_cli::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    /// Override the configured service host (scheme included, no trailing slash)
    #[arg(long, env = "BIBLIO_HOST")]
    host: Option<String>,

    /// Override the configured service port
    #[arg(long, env = "BIBLIO_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "biblio_cli=info".into());
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let mut io_handler = StdIoHandler::default();

    let store = ConfigStore::new(&args.config);
    let mut config = store.load_or_default();
    // Command-line overrides apply to the running session only; they are
    // persisted when the next explicit save happens.
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    let mut session = Session::new(config, store);

    tracing::info!(base_url = %session.config().base_url(), "starting catalog client");

    let reqwest_client = ReqwestClient::builder()
        .build()
        .context("Failed to build reqwest client")?;
    let mut http_client =
        ReqwestClientWrapper::new(reqwest_client.clone(), session.config().base_url());

    io_handler.write_line("Welcome to the books catalog client!")?;
    io_handler.write_line(&format!("Connecting to: {}", session.config().base_url()))?;

    loop {
        if !session.is_logged_in() {
            // --- Logged-out Menu ---
            io_handler.write_line("\n--- Main Menu ---")?;
            io_handler.write_line("[1] Login")?;
            io_handler.write_line("[2] Register")?;
            io_handler.write_line("[3] Health Check")?;
            io_handler.write_line("[4] Server Settings")?;
            io_handler.write_line("[q] Quit")?;

            let choice = io_handler.read_line("Enter choice:")?;

            match choice.as_str() {
                "1" => {
                    match handle_login_action(&http_client, &mut session, &mut io_handler).await {
                        Ok(()) => {
                            io_handler.write_line("Login successful. Tokens stored.")?;
                        }
                        Err(e) => {
                            tracing::error!(error = ?e, "Login failed");
                            io_handler.write_line(&format!("Login failed: {e}"))?;
                        }
                    }
                }
                "2" => {
                    match handle_registration_action(&http_client, &session, &mut io_handler).await
                    {
                        Ok(()) => { /* Server response printed within the handler */ }
                        Err(e) => {
                            tracing::error!(error = ?e, "Registration failed");
                            io_handler.write_line(&format!("Registration failed: {e}"))?;
                        }
                    }
                }
                "3" => {
                    let _ = handle_health_check_action(&http_client, &mut io_handler).await?;
                }
                "4" => {
                    match handle_server_settings_action(&mut session, &mut io_handler) {
                        Ok(()) => {
                            http_client = ReqwestClientWrapper::new(
                                reqwest_client.clone(),
                                session.config().base_url(),
                            );
                        }
                        Err(e) => {
                            io_handler.write_line(&format!("Settings not saved: {e}"))?;
                        }
                    }
                }
                "q" | "Q" => {
                    io_handler.write_line("Goodbye.")?;
                    return Ok(());
                }
                _ => {
                    io_handler.write_line("Invalid choice, please try again.")?;
                }
            }
        } else {
            // --- Logged-in Menu ---
            io_handler.write_line("\n--- Logged In Menu ---")?;
            io_handler.write_line("[1] Call Protected Endpoint")?;
            io_handler.write_line("[2] Search Books")?;
            io_handler.write_line("[3] Refresh Access Token")?;
            io_handler.write_line("[4] Show Tokens")?;
            io_handler.write_line("[5] Health Check")?;
            io_handler.write_line("[6] Server Settings")?;
            io_handler.write_line("[7] Logout")?;
            io_handler.write_line("[q] Quit")?;

            let choice = io_handler.read_line("Enter choice:")?;

            match choice.as_str() {
                "1" => {
                    match handle_protected_action(&http_client, &session, &mut io_handler).await {
                        Ok(()) => {}
                        Err(e) => {
                            tracing::error!(error = ?e, "Protected call failed");
                            io_handler.write_line(&format!("Protected call failed: {e}"))?;
                        }
                    }
                }
                "2" => {
                    match handle_search_books_action(&http_client, &session, &mut io_handler).await
                    {
                        Ok(()) => {}
                        Err(e) => {
                            tracing::error!(error = ?e, "Book search failed");
                            io_handler.write_line(&format!("Book search failed: {e}"))?;
                        }
                    }
                }
                "3" => match session.refresh(&http_client).await {
                    Ok(()) => {
                        io_handler.write_line("Access token updated.")?;
                    }
                    Err(e) => {
                        tracing::error!(error = ?e, "Token refresh failed");
                        io_handler.write_line(&format!("Token refresh failed: {e}"))?;
                    }
                },
                "4" => {
                    handle_show_tokens_action(&session, &mut io_handler)?;
                }
                "5" => {
                    let _ = handle_health_check_action(&http_client, &mut io_handler).await?;
                }
                "6" => {
                    match handle_server_settings_action(&mut session, &mut io_handler) {
                        Ok(()) => {
                            http_client = ReqwestClientWrapper::new(
                                reqwest_client.clone(),
                                session.config().base_url(),
                            );
                        }
                        Err(e) => {
                            io_handler.write_line(&format!("Settings not saved: {e}"))?;
                        }
                    }
                }
                "7" => {
                    handle_logout_action(&mut session, &mut io_handler)?;
                }
                "q" | "Q" => {
                    io_handler.write_line("Goodbye.")?;
                    return Ok(());
                }
                _ => {
                    io_handler.write_line("Invalid choice, please try again.")?;
                }
            }
        }
    }
}
