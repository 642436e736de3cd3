//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates session rules to
//! `state`.

pub mod login;
pub mod profile;
