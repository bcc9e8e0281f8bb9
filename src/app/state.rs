use crate::config::{Identity, Settings};
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub identity: Arc<Identity>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }

    /// Create `AppState` from configuration settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.identity.clone())
    }
}
