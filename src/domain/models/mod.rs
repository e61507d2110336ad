pub mod auth;
pub mod calendar_event;
pub mod project;
pub mod task;
pub mod user;
