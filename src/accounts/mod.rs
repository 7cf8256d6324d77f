//! Account registration, login, and the lightweight "added users" list.

mod model;
mod service;

pub use model::{Account, AccountResponse, AddUserRequest, AddedUser, LoginRequest, RegisterRequest};
pub use service::{AccountService, LoginError};
