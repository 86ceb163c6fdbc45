pub mod errors;
pub mod db;
pub mod user;
pub mod page;
pub mod article;
pub mod media;
pub mod document;
pub mod event;
pub mod registration;
pub mod task;
pub mod member;

#[cfg(test)]
mod tests;
