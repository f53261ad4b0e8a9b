//! Login state holder.
//!
//! A deliberately small state machine: `LoggedOut` → (`submit`) → `LoggedIn`
//! on a credential match, or a transient wrong-credentials flag that clears
//! itself — together with both input fields — after a fixed delay. There is no
//! lockout, no attempt counting, and no persisted session.
//!
//! Credential verification is behind the [`CredentialPolicy`] seam so the
//! state machine stays decoupled from the literal values; the default policy
//! carries the application's fixed pair.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::app::cell::StateCell;

/// How long the wrong-credentials flag stays set before the holder resets.
pub const WRONG_CREDENTIALS_RESET: Duration = Duration::from_millis(1000);

/// Verifies a submitted credential pair.
pub trait CredentialPolicy: Send + Sync {
    /// Returns `true` when the pair is acceptable.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Policy accepting exactly one fixed credential pair.
///
/// The default instance carries the application's built-in pair.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Creates a policy accepting only the given pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

impl CredentialPolicy for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Snapshot of the login holder's state.
///
/// Invariant: `wrong` is transient — it auto-resets after
/// [`WRONG_CREDENTIALS_RESET`], at which point both input fields are cleared
/// as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Current username input.
    pub username: String,

    /// Current password input.
    pub password: String,

    /// Whether a submit has succeeded and no logout happened since.
    pub logged_in: bool,

    /// Transient wrong-credentials flag.
    pub wrong: bool,
}

/// Reactive state holder for the login screen.
///
/// Cloning is cheap and clones share the same state.
#[derive(Clone)]
pub struct LoginViewModel {
    state: Arc<StateCell<LoginState>>,
    policy: Arc<dyn CredentialPolicy>,
}

impl LoginViewModel {
    /// Creates a logged-out holder with the given verification policy.
    #[must_use]
    pub fn new(policy: Arc<dyn CredentialPolicy>) -> Self {
        Self {
            state: Arc::new(StateCell::new(LoginState::default())),
            policy,
        }
    }

    /// Snapshot of the current login state.
    #[must_use]
    pub fn state(&self) -> LoginState {
        self.state.get()
    }

    /// Subscribes to login state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    /// Updates the username input field.
    ///
    /// Field edits do not supersede a pending wrong-credentials reset; the
    /// reset clears whatever was typed in the meantime.
    pub fn set_username(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.modify(|state| state.username = value);
    }

    /// Updates the password input field.
    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.modify(|state| state.password = value);
    }

    /// Submits the current credential pair.
    ///
    /// On a match the holder transitions directly to logged-in. On a mismatch
    /// the wrong-credentials flag is raised and a reset is scheduled for
    /// [`WRONG_CREDENTIALS_RESET`] later, clearing the flag and both input
    /// fields. A newer submit supersedes a pending reset through the state
    /// cell's generation counter.
    ///
    /// Must be called from within a tokio runtime: the reset timer is a
    /// spawned task.
    pub fn submit(&self) {
        let snapshot = self.state.get();

        if self.policy.verify(&snapshot.username, &snapshot.password) {
            tracing::debug!("login accepted");
            self.state.set(LoginState {
                logged_in: true,
                wrong: false,
                ..snapshot
            });
            return;
        }

        tracing::debug!("login rejected");
        let generation = self.state.begin();
        self.state.publish(
            generation,
            LoginState {
                wrong: true,
                ..snapshot
            },
        );

        let cell = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(WRONG_CREDENTIALS_RESET).await;
            if cell.publish(generation, LoginState::default()) {
                tracing::debug!("wrong-credentials flag reset");
            }
        });
    }

    /// Logs out unconditionally, clearing both input fields.
    pub fn logout(&self) {
        self.state.set(LoginState::default());
    }
}
