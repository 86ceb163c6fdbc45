//! In-memory demo service: a generic record store addressed by resource
//! name, plus a cosmetic login. Nothing here touches the database.

pub mod auth;
pub mod errors;
pub mod resource;
pub mod store;

pub use auth::{DemoCredentials, DemoLogin, DemoToken, DEMO_TOKEN};
pub use errors::DemoError;
pub use resource::ResourceKind;
pub use store::{DemoPatch, DemoRecord, DemoStore};
