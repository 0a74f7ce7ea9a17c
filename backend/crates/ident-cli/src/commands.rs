use crate::{token_commands::TokenCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User account operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Bearer token operations
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}
