use chrono::{DateTime, Utc};

use crate::domain::{SessionId, WizardState};

/// Port for per-session wizard state.
///
/// State is scoped to its `SessionId` and never visible to other sessions.
pub trait SessionStore {
    /// Return the session's state, creating a fresh one on first contact or
    /// after it expired. Touches the session's activity time.
    fn get_or_create(&mut self, id: &SessionId, now: DateTime<Utc>) -> WizardState;

    /// Replace the session's state.
    fn save(&mut self, id: &SessionId, state: WizardState, now: DateTime<Utc>);

    /// Drop the session entirely.
    fn remove(&mut self, id: &SessionId);

    /// Drop every session idle past the timeout. Returns how many were dropped.
    fn purge_expired(&mut self, now: DateTime<Utc>) -> usize;
}
