//! Networking: the REST call to the credential validator.

pub mod api;
