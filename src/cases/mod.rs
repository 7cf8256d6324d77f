//! Case records with read-time owner expansion.

mod model;
mod service;

pub use model::{Case, CaseResponse, CreateCaseRequest};
pub use service::CaseService;
