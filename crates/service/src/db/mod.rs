//! Content services: free async functions over the shared database handle.

pub mod page_service;
pub mod article_service;
pub mod media_service;
pub mod document_service;
pub mod event_service;
pub mod registration_service;
pub mod task_service;
pub mod member_service;

/// Row cap for ordinary listings.
pub const LIST_LIMIT: u64 = 100;
/// Row cap for the member listing.
pub const MEMBER_LIST_LIMIT: u64 = 200;
/// Row cap for registration exports.
pub const REGISTRATION_LIST_LIMIT: u64 = 1000;

/// Treat blank query-string filters as absent.
pub(crate) fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}
