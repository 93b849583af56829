pub mod auth;
pub mod dashboard;
pub mod health;
pub mod logs;
pub mod maintenance;
pub mod reports;
pub mod sites;
