pub mod auth_service;
pub mod dashboard;
pub mod guard;
