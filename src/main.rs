use std::process::ExitCode;

use clap::Parser;
use solara_imaging_lib::bootstrap::tracing::init_tracing_subscriber;
use solara_imaging_lib::cli::{run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match run(cli).await {
        Ok(filename) if !filename.is_empty() => {
            println!("{filename}");
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("No image could be produced");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
