//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the reqwest REST gateway, the auth client, and the session stores.

pub mod auth;
pub mod rest;
pub mod session;

pub use auth::AuthClient;
pub use rest::{RestClient, RestCoverStore, RestResource, RestTagLinks};
pub use session::{InMemorySessionStore, JsonFileSessionStore};
