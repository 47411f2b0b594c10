//! Authentication client boundary.
//!
//! # Responsibility
//! - Expose session retrieval and auth-change subscription to the views.
//! - Provide an in-process client that owns the current session.
//!
//! # Invariants
//! - Listeners are invoked outside the listener lock.
//! - Dropping a [`Subscription`] unsubscribes its listener exactly once.

use crate::model::article::UserId;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use uuid::Uuid;

/// Authenticated identity plus its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub access_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
}

/// Callback invoked on every auth state change.
pub type AuthListener = dyn Fn(AuthEvent, Option<&Session>) + Send + Sync;

/// Session source used by the views.
pub trait AuthClient: Send + Sync {
    /// Returns the current session, if any.
    fn get_session(&self) -> Option<Session>;

    /// Registers a listener; it stays active until the returned handle drops.
    fn on_auth_state_change(&self, listener: Box<AuthListener>) -> Subscription;
}

/// Handle for an active auth-change listener.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Explicitly releases the listener. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

type ListenerTable = Mutex<BTreeMap<u64, Arc<AuthListener>>>;

/// In-process auth client holding at most one session.
///
/// Credential checks belong to the identity provider; `sign_in` trusts the
/// identity it is given.
#[derive(Default)]
pub struct LocalAuthClient {
    session: Mutex<Option<Session>>,
    listeners: Arc<ListenerTable>,
    next_listener_id: AtomicU64,
}

impl LocalAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `user_id` and emits [`AuthEvent::SignedIn`].
    pub fn sign_in(&self, user_id: UserId) -> Session {
        let session = Session {
            user_id,
            access_token: Uuid::new_v4().simple().to_string(),
        };
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        info!("event=auth_sign_in module=auth status=ok user_id={user_id}");
        self.emit(AuthEvent::SignedIn, Some(&session));
        session
    }

    /// Clears the session and emits [`AuthEvent::SignedOut`].
    pub fn sign_out(&self) {
        let previous = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            info!("event=auth_sign_out module=auth status=ok");
            self.emit(AuthEvent::SignedOut, None);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let listeners: Vec<Arc<AuthListener>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        debug!(
            "event=auth_emit module=auth status=ok kind={event:?} listeners={}",
            listeners.len()
        );
        for listener in listeners {
            listener(event, session);
        }
    }
}

impl AuthClient for LocalAuthClient {
    fn get_session(&self) -> Option<Session> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn on_auth_state_change(&self, listener: Box<AuthListener>) -> Subscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::from(listener));

        let table: Weak<ListenerTable> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(table) = table.upgrade() {
                table
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthClient, AuthEvent, LocalAuthClient};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[test]
    fn sign_in_sets_session_and_notifies_listeners() {
        let client = LocalAuthClient::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = client.on_auth_state_change(Box::new(move |event, session| {
            sink.lock()
                .expect("listener lock")
                .push((event, session.map(|s| s.user_id)));
        }));

        let user = Uuid::new_v4();
        client.sign_in(user);
        client.sign_out();

        assert!(client.get_session().is_none());
        assert_eq!(
            *seen.lock().expect("seen lock"),
            vec![(AuthEvent::SignedIn, Some(user)), (AuthEvent::SignedOut, None)]
        );
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let client = LocalAuthClient::new();
        let subscription = client.on_auth_state_change(Box::new(|_, _| {}));
        assert_eq!(client.listener_count(), 1);

        drop(subscription);
        assert_eq!(client.listener_count(), 0);

        let explicit = client.on_auth_state_change(Box::new(|_, _| {}));
        explicit.unsubscribe();
        assert_eq!(client.listener_count(), 0);
    }

    #[test]
    fn sign_out_without_session_is_silent() {
        let client = LocalAuthClient::new();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let _subscription = client.on_auth_state_change(Box::new(move |_, _| {
            *counter.lock().expect("counter lock") += 1;
        }));

        client.sign_out();
        assert_eq!(*calls.lock().expect("calls lock"), 0);
    }
}
