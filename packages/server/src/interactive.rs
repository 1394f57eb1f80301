//! Interactive mode for the server.
//!
//! Prompts the user for bind address, port, and dataset location before
//! starting the server.

use dialoguer::{Confirm, Input};

use crate::DEFAULT_DATA_PATH;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Asks the user for a bind address, port, and dataset path, sets the
/// corresponding environment variables (`BIND_ADDR`, `PORT`,
/// `GREENGRID_DATA_PATH`), and delegates to [`super::run_server`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("GreenGrid Server");
    println!();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default("127.0.0.1".to_string())
        .interact_text()
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default("8080".to_string())
        .interact_text()
        .unwrap_or_else(|_| "8080".to_string());

    let data_path: String = Input::new()
        .with_prompt("Dataset path")
        .default(DEFAULT_DATA_PATH.to_string())
        .interact_text()
        .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    if !std::path::Path::new(&data_path).exists() {
        println!("Note: {data_path} does not exist yet; queries will return empty results.");
    }

    // SAFETY: We are single-threaded at this point (before server starts) and
    // these variables are only read once during server initialisation.
    unsafe {
        std::env::set_var("BIND_ADDR", &bind_addr);
        std::env::set_var("PORT", &port_str);
        std::env::set_var("GREENGRID_DATA_PATH", &data_path);
    }

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port_str}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server().await
}
