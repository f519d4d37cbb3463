//! Pre-navigation authentication guard.

use crate::frontend::app::routes::{self, RouteDescriptor};
use std::sync::Arc;

/// Where the guard sends unauthenticated navigations.
pub const LOGIN_PATH: &str = "/login";

/// Read-only view of the stored credential.
///
/// The guard never writes; login and logout go through
/// [`AuthState`](crate::frontend::services::context::AuthState).
pub trait CredentialLookup: Send + Sync {
    /// Returns the stored token, if any.
    fn token(&self) -> Option<String>;
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decides, before a navigation commits, whether it may proceed.
#[derive(Clone)]
pub struct NavigationGuard {
    credentials: Arc<dyn CredentialLookup>,
}

impl NavigationGuard {
    pub fn new(credentials: Arc<dyn CredentialLookup>) -> Self {
        Self { credentials }
    }

    /// True when a non-empty token is stored.
    ///
    /// The one presence check in the crate; `check` applies it and the
    /// session state is seeded from it at startup. Token content is never
    /// inspected beyond presence, and an empty string counts as absent.
    pub fn authenticated(&self) -> bool {
        self.credentials
            .token()
            .is_some_and(|token| !token.is_empty())
    }

    /// Checks a navigation to `target`.
    ///
    /// A protected target with no stored token redirects to the login page;
    /// everything else proceeds.
    pub fn check(&self, target: &RouteDescriptor) -> GuardDecision {
        if target.requires_auth && !self.authenticated() {
            log::debug!("no session token, redirecting {} to {LOGIN_PATH}", target.path);
            return GuardDecision::Redirect(LOGIN_PATH);
        }

        GuardDecision::Proceed
    }

    /// Checks a navigation to `path`, looking the descriptor up in the
    /// route table. A path the table does not know fails closed: gated
    /// pages call this for themselves, and a missing descriptor must not
    /// skip the gate.
    pub fn check_path(&self, path: &str) -> GuardDecision {
        match routes::resolve(path) {
            Some(target) => self.check(target),
            None => GuardDecision::Redirect(LOGIN_PATH),
        }
    }
}
