//! goose test runner - runs the goose test suites with the Go toolchain

use clap::Parser;
use goose_test::commands::Cli;
use goose_test::{cli, common};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    common::logging::init_cli();

    match cli::dispatch(&cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
