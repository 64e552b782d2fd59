use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::{Session, SessionId, WizardState};
use crate::ports::SessionStore;

/// In-process session store with idle expiry.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: HashMap<SessionId, Session>,
    idle_timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self { sessions: HashMap::new(), idle_timeout }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&mut self, id: &SessionId, now: DateTime<Utc>) -> WizardState {
        let idle_timeout = self.idle_timeout;
        let session = self
            .sessions
            .entry(id.clone())
            .and_modify(|session| {
                if session.is_expired(now, idle_timeout) {
                    debug!(session = %id, "session expired; starting over");
                    *session = Session::new(now);
                }
            })
            .or_insert_with(|| {
                debug!(session = %id, "session created");
                Session::new(now)
            });
        session.last_active = now;
        session.state.clone()
    }

    fn save(&mut self, id: &SessionId, state: WizardState, now: DateTime<Utc>) {
        self.sessions.insert(id.clone(), Session { state, last_active: now });
    }

    fn remove(&mut self, id: &SessionId) {
        self.sessions.remove(id);
    }

    fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        let idle_timeout = self.idle_timeout;
        self.sessions.retain(|_, session| !session.is_expired(now, idle_timeout));
        before - self.sessions.len()
    }
}
