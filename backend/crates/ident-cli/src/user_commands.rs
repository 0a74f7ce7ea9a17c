use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Plaintext password; hashed before storage
        #[arg(long)]
        password: String,
    },
    /// Get a user by email
    Get {
        #[arg(long)]
        email: String,
    },
    /// Get a user's id and name
    Summary {
        /// User ID
        id: i64,
    },
    /// List every user except one
    List {
        /// User ID to leave out (usually the caller)
        #[arg(long)]
        exclude: i64,
    },
    /// Check an email/password pair
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}
