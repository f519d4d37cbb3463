//! Authentication context and state management.

use crate::frontend::services::session::SessionStore;
use dioxus::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    store: Arc<SessionStore>,
}

impl AuthState {
    pub fn new(is_authenticated: Signal<bool>, store: Arc<SessionStore>) -> Self {
        Self {
            is_authenticated,
            store,
        }
    }

    /// Stores the access token and marks the session authenticated.
    pub async fn login(&mut self, token: String) -> Result<(), String> {
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err("Enter an access token to continue".to_string());
        }

        if let Err(e) = self.store.save_token(&token).await {
            return Err(format!("Failed to save session: {e}"));
        }

        log::info!("session token stored");
        self.is_authenticated.set(true);

        Ok(())
    }

    /// Drops the stored token and marks the session signed out.
    pub async fn logout(&mut self) {
        self.is_authenticated.set(false);
        if let Err(e) = self.store.clear_token().await {
            log::warn!("failed to clear session token: {e}");
        }
    }
}
