#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Tapak location analytics engine.
//!
//! Listens on `BIND_ADDR:PORT` (default `127.0.0.1:8080`). Log output is
//! controlled by `RUST_LOG`.

#[actix_web::main]
async fn main() -> Result<(), tapak_server::ServerError> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    tapak_server::run_server().await
}
