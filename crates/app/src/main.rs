//! Storefront Application CLI

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
pub async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "CLI errors are reported on stderr, not through tracing"
            )]
            {
                eprintln!("{error}");
            }

            ExitCode::FAILURE
        }
    }
}
