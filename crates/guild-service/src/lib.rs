//! # guild-service
//!
//! Application layer containing the guild use cases, request/response DTOs
//! and the dependency container handed to the HTTP layer.

pub mod dto;
pub mod services;

pub use dto::{
    CreateGuildRequest, GuildResponse, HealthResponse, ReadinessResponse, UpdateGuildRequest,
};
pub use services::{
    GuildService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
