//! REST adapters over the backend's CRUD, cover and tag endpoints.

mod client;
mod covers;
mod resource;
mod tags;

pub use client::RestClient;
pub use covers::RestCoverStore;
pub use resource::RestResource;
pub use tags::RestTagLinks;
