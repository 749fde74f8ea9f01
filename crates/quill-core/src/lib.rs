//! # Quill Core
//!
//! The domain layer of the Quill admin toolkit.
//! Typed models over the CMS backend's JSON, the post-editor save workflow,
//! and the ports the infrastructure crate implements. No HTTP or storage
//! dependencies here.

pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod ports;

pub use error::{GatewayError, SessionError};
