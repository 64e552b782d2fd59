use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::domain::WizardState;

/// Identifier of one user's wizard session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wizard state plus the time it was last touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub state: WizardState,
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { state: WizardState::new(), last_active: now }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now.signed_duration_since(self.last_active) > idle_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn expiry_is_strictly_after_timeout() {
        let start = Utc::now();
        let session = Session::new(start);
        let timeout = Duration::minutes(30);
        assert!(!session.is_expired(start + Duration::minutes(30), timeout));
        assert!(session.is_expired(start + Duration::minutes(31), timeout));
    }
}
