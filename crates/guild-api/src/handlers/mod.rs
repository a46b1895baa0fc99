//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod guilds;
pub mod health;
