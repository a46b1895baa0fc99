//! # guild-client
//!
//! Typed HTTP client for the guild REST API and the list view-model that
//! keeps a local copy of the guilds in step with server responses.

pub mod api;
pub mod error;
pub mod model;

pub use api::{GuildApiClient, GuildRecord};
pub use error::{ClientError, ClientResult};
pub use model::{EditDraft, GuildListModel};
