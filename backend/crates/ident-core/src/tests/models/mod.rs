mod credential;
mod identity;
