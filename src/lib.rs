pub mod api;
pub mod dashboard;
pub mod demo;
pub mod errors;
pub mod models;
pub mod session;
pub mod store;
pub mod workflow;
