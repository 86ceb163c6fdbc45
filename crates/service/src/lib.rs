//! Service layer providing the site's business operations on top of models.
//! - Auth (shared secret code, argon2 hashes, bearer tokens).
//! - Content CRUD for pages, articles, media, documents, events, registrations, tasks, members.
//! - Sample-content seeding, upload storage and the mock task agent.
//! - The in-memory demo store backing the `demo` binary.

pub mod errors;
pub mod auth;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod db;
pub mod agent;
pub mod seed;
pub mod demo;
