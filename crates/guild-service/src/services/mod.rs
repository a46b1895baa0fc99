//! Business logic services
//!
//! Guild use cases plus the context and error types they share.

pub mod context;
pub mod error;
pub mod guild;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use guild::GuildService;
