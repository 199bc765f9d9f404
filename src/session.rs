use std::sync::{Arc, RwLock};
use tracing::debug;

/// Shared holder for the bearer credential. The embedding application sets
/// it on login and clears it on logout; the API client reads it on every
/// request. Cloning shares the same underlying slot.
#[derive(Clone, Default)]
pub struct SessionTokens {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set(token);
        session
    }

    pub fn set(&self, token: impl Into<String>) {
        debug!("Session token updated");
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn clear(&self) {
        debug!("Session token cleared");
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
