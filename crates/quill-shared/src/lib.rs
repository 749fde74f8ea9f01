//! # Quill Shared
//!
//! Wire-level shapes shared between the admin tooling and the backend:
//! the error envelope (with its field-level validation map) and the auth
//! request DTOs.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
