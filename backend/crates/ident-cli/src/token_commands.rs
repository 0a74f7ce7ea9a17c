use ident_core::scope;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Resolve a bearer token to the user it was issued for
    Resolve {
        #[arg(long)]
        token: String,
        /// Token purpose, e.g. authentication, activation, password-reset
        #[arg(long, default_value = scope::AUTHENTICATION)]
        scope: String,
    },
}
