//! In-process session store
//!
//! Sessions live for the process lifetime only, like the memory store the
//! previous deployment used. A session id travels in the `caselink.sid`
//! cookie. Login creates a session and `/logout` destroys it; no route is
//! gated on having one.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "caselink.sid";

/// Per-session data captured at login.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub account_id: Uuid,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
}

/// Process-wide session store.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionData>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for an account and return its id.
    pub fn create(&self, account_id: Uuid, account_name: &str) -> Uuid {
        let session_id = Uuid::new_v4();
        let data = SessionData {
            account_id,
            account_name: account_name.to_string(),
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(session_id, data);
        session_id
    }

    /// Look up a session by id.
    pub fn get(&self, session_id: &Uuid) -> Option<SessionData> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(session_id)
            .cloned()
    }

    /// Destroy a session. Returns true if one existed.
    pub fn destroy(&self, session_id: &Uuid) -> bool {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(session_id)
            .is_some()
    }

    /// Whether a raw cookie value names a live session.
    pub fn is_live(&self, cookie_value: &str) -> bool {
        cookie_value
            .parse::<Uuid>()
            .map(|id| self.get(&id).is_some())
            .unwrap_or(false)
    }
}
