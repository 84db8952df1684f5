//! Interactive mode for the server.
//!
//! Prompts the user for bind address and port before starting the server.

use dialoguer::{Confirm, Input};

use crate::{ServerConfig, ServerError};

/// Runs the server in interactive mode, prompting for configuration.
///
/// Defaults come from `BIND_ADDR`/`PORT` when set. The caller is
/// responsible for initializing logging.
///
/// # Errors
///
/// Returns [`ServerError`] if the entered port is invalid or the server
/// fails to start.
#[allow(clippy::future_not_send)]
pub async fn run() -> Result<(), ServerError> {
    println!("Tapak Analytics Server");
    println!();

    let defaults = ServerConfig::from_env().unwrap_or_default();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or(defaults.bind_addr);

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default(defaults.port.to_string())
        .interact_text()
        .unwrap_or_else(|_| defaults.port.to_string());

    let config = ServerConfig::from_lookup(|key| match key {
        "BIND_ADDR" => Some(bind_addr.clone()),
        "PORT" => Some(port_str.clone()),
        _ => None,
    })?;

    if !Confirm::new()
        .with_prompt(format!(
            "Start server on {}:{}?",
            config.bind_addr, config.port
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::serve(config).await
}
