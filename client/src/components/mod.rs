//! Reusable UI building blocks.

pub mod calculator;
pub mod require_token;
