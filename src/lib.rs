//! CaseLink Backend Library
//!
//! This library exports the core modules for the CaseLink backend server.

pub mod accounts;
pub mod cases;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod middleware;
pub mod mint;
pub mod routes;
pub mod session;
pub mod state;
