pub mod connection;
pub mod error;
pub mod repositories;
pub mod timeouts;
pub mod token_resolver;

pub use connection::pool::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
pub use timeouts::QueryTimeouts;
pub use token_resolver::TokenResolver;
