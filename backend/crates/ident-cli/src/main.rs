//! ident - identity administration CLI
//!
//! # Examples
//!
//! ```bash
//! # Register a user
//! ident user create --name Ada --email ada@x.com --password longenough1
//!
//! # Check a password
//! ident user verify --email ada@x.com --password longenough1
//!
//! # Resolve a bearer token
//! ident token resolve --token Y3QMGX3PJ3WLRL2YRTQGQ6KRHU --scope authentication
//! ```

mod cli;
mod commands;
mod token_commands;
mod user_commands;

use crate::{
    cli::Cli, commands::Commands, token_commands::TokenCommands, user_commands::UserCommands,
};

use ident_cli::{AccountService, CliError, Result as CliResult, logger};
use ident_config::Config;
use ident_db::QueryTimeouts;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| CliError::logger(format!("Failed to create log directory: {e}")))?;
    }

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ident v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = ident_db::connect(&config.database_path()?, config.database.max_connections).await?;
    let timeouts = QueryTimeouts::new(config.database.read_timeout(), config.database.write_timeout());
    let accounts = AccountService::new(pool, timeouts);

    let value = match cli.command {
        Commands::User { action } => match action {
            UserCommands::Create {
                name,
                email,
                password,
            } => {
                let identity = accounts.register(&name, &email, &password).await?;
                serde_json::to_value(identity.to_response())?
            }
            UserCommands::Get { email } => serde_json::to_value(accounts.find_by_email(&email).await?)?,
            UserCommands::Summary { id } => serde_json::to_value(accounts.summary(id).await?)?,
            UserCommands::List { exclude } => {
                serde_json::to_value(accounts.list_others(exclude).await?)?
            }
            UserCommands::Verify { email, password } => {
                let identity = accounts.authenticate(&email, &password).await?;
                json!({ "valid": true, "user": identity })
            }
        },

        Commands::Token { action } => match action {
            TokenCommands::Resolve { token, scope } => {
                serde_json::to_value(accounts.resolve_token(&token, &scope).await?)?
            }
        },
    };

    Ok(value)
}

/// Full detail goes to the log; the terminal only gets the sanitized message.
fn report(e: &CliError) {
    error!("{}", e);

    match e.field_errors() {
        Some(errors) => {
            eprintln!("Error: the request contains invalid fields");
            for (field, message) in errors {
                eprintln!("  {}: {}", field, message);
            }
        }
        None => eprintln!("Error: {}", e.user_message()),
    }
}
