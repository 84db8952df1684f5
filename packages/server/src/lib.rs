#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Tapak location analytics engine.
//!
//! The dashboard gathers the competitor list, satellite change statistics
//! and NDVI analysis for a location, then posts them here as a single
//! `AnalysisInputs` body. The server runs the analytics engine inline and
//! returns the success score, seasonal demand curve, KPIs or the assistant
//! briefing. It holds no state between requests.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use thiserror::Error;

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value was invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: String,
    /// Port to bind to.
    pub port: u16,
}

impl ServerConfig {
    /// Default bind address.
    pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
    /// Default port.
    pub const DEFAULT_PORT: u16 = 8080;

    /// Reads `BIND_ADDR` and `PORT` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup, falling back to
    /// the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let bind_addr = lookup("BIND_ADDR")
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().map_err(|_| ServerError::Config {
                message: format!("Invalid PORT '{port}': expected a number from 0 to 65535"),
            })?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self { bind_addr, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: Self::DEFAULT_BIND_ADDR.to_string(),
            port: Self::DEFAULT_PORT,
        }
    }
}

/// Registers the `/api` routes and payload error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .app_data(handlers::query_config())
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health))
                .route("/analysis", web::post().to(handlers::analysis))
                .route("/score", web::post().to(handlers::score))
                .route("/demand", web::post().to(handlers::demand))
                .route("/kpis", web::post().to(handlers::kpis))
                .route("/briefing", web::post().to(handlers::briefing)),
        );
}

/// Starts the HTTP server with the given config and runs until shutdown.
///
/// The caller is responsible for initializing logging and providing the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the server fails to bind or encounters a
/// runtime error.
#[allow(clippy::future_not_send)]
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await?;

    Ok(())
}

/// Starts the server using `BIND_ADDR` and `PORT` from the environment.
///
/// # Errors
///
/// Returns [`ServerError`] if the environment is invalid or the server
/// fails to start.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    serve(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn reads_overrides() {
        let config =
            ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "0.0.0.0"), ("PORT", " 3000 ")]))
                .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ServerError::Config { .. }));
        assert!(err.to_string().contains("eighty"));
    }
}
