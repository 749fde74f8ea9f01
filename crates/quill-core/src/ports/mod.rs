//! Ports - traits the infrastructure layer implements.

mod covers;
mod gateway;
mod session;
mod tags;

pub use covers::CoverStore;
pub use gateway::EntityGateway;
pub use session::SessionStore;
pub use tags::TagLinks;
