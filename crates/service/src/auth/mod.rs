//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Signup and login are gated by a shared secret code; successful calls
//! return a signed bearer token whose subject is the user id.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{AuthConfig, AuthService, DynAuthService};
