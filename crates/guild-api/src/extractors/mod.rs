//! Axum extractors for request handling
//!
//! Custom extractors for path identifiers and validated JSON bodies.

mod path;
mod validated;

pub use path::GuildIdPath;
pub use validated::ValidatedJson;
