mod commands;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use commands::{Cli, Command, CommandError};
use places_admin_client::{ApiClient, ApiConfig, KeyringSessionStore, Location, SessionStore};

#[tokio::main]
async fn main() -> ExitCode {
    // Shares VITE_* vars with the web front end when run from its root
    let _ = dotenvy::dotenv();

    env_logger::init();

    let cli = Cli::parse();

    let mut config = match ApiConfig::from_env(cli.mode.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&CommandError::from(e), false, false),
    };
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    log::debug!("Using {} ({} mode)", config.base_url, config.mode);

    let session: Arc<dyn SessionStore> = Arc::new(KeyringSessionStore::new());
    let location = Arc::new(Location::new());
    let client = ApiClient::new(&config, session, location.clone());

    let logging_in = matches!(cli.command, Command::Login { .. });
    match commands::run(&client, cli.command).await {
        Ok(value) => {
            let out = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, location.at_entry(), logging_in),
    }
}

fn report(err: &CommandError, session_ended: bool, logging_in: bool) -> ExitCode {
    eprintln!("{}", commands::failure_message(err, session_ended, logging_in));
    ExitCode::FAILURE
}
