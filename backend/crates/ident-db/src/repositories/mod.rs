pub mod identity_repository;
pub(crate) mod identity_row;
