use std::env;
use std::process::ExitCode;

use hrms_lite::client::{ApiClient, DEFAULT_API_BASE};
use hrms_lite::ui::{self, Command};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::from(2);
        }
    };

    let base = env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    let client = match ApiClient::new(base) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", ui::render_error(&e));
            return ExitCode::FAILURE;
        }
    };

    match ui::run(&client, command).await {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", ui::render_error(&e));
            ExitCode::FAILURE
        }
    }
}
