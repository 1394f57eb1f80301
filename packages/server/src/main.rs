#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the GreenGrid API server.

use clap::Parser;

#[derive(Parser)]
#[command(name = "greengrid_server", about = "GreenGrid ward vulnerability API server")]
struct Cli {
    /// Prompt for bind address and port before starting
    #[arg(long)]
    interactive: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    if cli.interactive {
        greengrid_server::interactive::run().await
    } else {
        greengrid_server::run_server().await
    }
}
