//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::accounts::AccountService;
use crate::cases::CaseService;
use crate::messages::MessageService;
use crate::mint::MintService;
use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub case_service: Arc<CaseService>,
    pub message_service: Arc<MessageService>,
    pub mint_service: Arc<MintService>,
    pub sessions: SessionStore,
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(
        account_service: Arc<AccountService>,
        case_service: Arc<CaseService>,
        message_service: Arc<MessageService>,
        mint_service: Arc<MintService>,
        sessions: SessionStore,
        db_pool: PgPool,
    ) -> Self {
        Self {
            account_service,
            case_service,
            message_service,
            mint_service,
            sessions,
            db_pool,
        }
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<AccountService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.account_service.clone()
    }
}

impl FromRef<AppState> for Arc<CaseService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.case_service.clone()
    }
}

impl FromRef<AppState> for Arc<MessageService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.message_service.clone()
    }
}

impl FromRef<AppState> for Arc<MintService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mint_service.clone()
    }
}
