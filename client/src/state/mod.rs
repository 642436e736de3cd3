//! Client-side state: the session handle and the login form lifecycle.

pub mod auth;
pub mod login;
