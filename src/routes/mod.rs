//! Route definitions for the CaseLink API

mod auth;
mod cases;
mod messages;
mod mint;
mod pages;
mod users;

pub use auth::auth_routes;
pub use cases::case_routes;
pub use messages::message_routes;
pub use mint::mint_routes;
pub use pages::page_routes;
pub use users::user_routes;
