pub mod credential;
pub mod identity;
pub mod identity_response;
pub mod identity_summary;
