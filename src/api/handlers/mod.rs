pub mod auth;
pub mod calendar;
pub mod comment;
pub mod dashboard;
pub mod health;
pub mod member;
pub mod project;
pub mod task;
pub mod user;
