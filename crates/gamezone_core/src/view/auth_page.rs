//! Sign-in page lifecycle.
//!
//! # Invariants
//! - An existing session redirects home on mount.
//! - A `SignedIn` event notifies once and redirects home.
//! - The auth subscription lives exactly as long as the page.

use crate::auth::{AuthClient, AuthEvent, Subscription};
use crate::notify::{NoticeLevel, Notifier};
use crate::route::Route;
use std::sync::{Arc, Mutex, PoisonError};

pub const WELCOME_MESSAGE: &str = "Welcome to Gaming News Hub!";

/// Mounted sign-in page. Dropping it tears down its auth subscription.
pub struct AuthPage {
    redirect: Arc<Mutex<Option<Route>>>,
    _subscription: Subscription,
}

impl AuthPage {
    /// Mounts the page against `auth`.
    ///
    /// `notifier` is shared with the listener, which may fire after mount.
    pub fn mount(auth: &dyn AuthClient, notifier: Arc<dyn Notifier + Send + Sync>) -> Self {
        let redirect = Arc::new(Mutex::new(None));
        if auth.get_session().is_some() {
            *redirect.lock().unwrap_or_else(PoisonError::into_inner) = Some(Route::Home);
        }

        let target = Arc::clone(&redirect);
        let subscription = auth.on_auth_state_change(Box::new(move |event, session| {
            if event == AuthEvent::SignedIn && session.is_some() {
                notifier.notify(NoticeLevel::Success, WELCOME_MESSAGE);
                *target.lock().unwrap_or_else(PoisonError::into_inner) = Some(Route::Home);
            }
        }));

        Self {
            redirect,
            _subscription: subscription,
        }
    }

    /// Pending navigation, if the page decided to leave.
    pub fn redirect(&self) -> Option<Route> {
        self.redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
