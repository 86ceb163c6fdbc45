pub mod state;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod openapi;
pub mod startup;
pub mod demo;

pub use startup::run;
pub use demo::run_demo;
