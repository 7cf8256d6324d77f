//! API handlers for the CaseLink backend

pub mod auth;
pub mod cases;
pub mod messages;
pub mod mint;
pub mod pages;
pub mod users;
