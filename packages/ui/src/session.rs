//! Session state and hooks.
//!
//! The session is process-wide state with an explicit lifecycle: bootstrapped
//! from durable storage on mount, torn down on logout. The bearer token is
//! the source of truth for "logged in"; the profile is best-effort
//! rehydrated from `/auth/me` and falls back to the locally cached copy when
//! a conditional response arrives without a body.

use api::{ApiClient, ApiError, User, UserUpdate};
use dioxus::prelude::*;

use crate::prefs::make_prefs;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

/// Handle to the shared session. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<SessionState>,
}

/// Get the current session.
/// Panics when used outside a [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// API client for the resolved base URL, carrying the current token.
    pub fn client(&self) -> ApiClient {
        let prefs = make_prefs();
        ApiClient::new(store::config::resolve_api_base_url(&prefs)).with_token(self.token())
    }

    /// Exchange credentials for a token and profile.
    ///
    /// On failure neither the in-memory state nor durable storage changes —
    /// a bad login attempt must not disturb an existing session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let auth = self.client().login(email, password).await?;
        let prefs = make_prefs();
        prefs.set_auth_token(&auth.token);
        prefs.set_cached_profile(&auth.data);
        self.state.set(SessionState {
            user: Some(auth.data),
            token: Some(auth.token),
            loading: false,
        });
        Ok(())
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let auth = self.client().register(name, email, password).await?;
        let prefs = make_prefs();
        prefs.set_auth_token(&auth.token);
        prefs.set_cached_profile(&auth.data);
        self.state.set(SessionState {
            user: Some(auth.data),
            token: Some(auth.token),
            loading: false,
        });
        Ok(())
    }

    /// Notify the server, then clear local state unconditionally.
    ///
    /// A network failure must not leave a locally "logged in" session behind.
    pub async fn logout(&mut self) {
        if let Err(err) = self.client().logout().await {
            tracing::warn!("server logout failed: {err}");
        }
        make_prefs().clear_session();
        self.state.set(SessionState {
            user: None,
            token: None,
            loading: false,
        });
    }

    /// Update the profile record and refresh the cached copy.
    pub async fn update_profile(&mut self, update: &UserUpdate) -> Result<User, ApiError> {
        let Some(user) = self.user() else {
            return Err(ApiError::Status {
                status: 401,
                message: "Not authenticated".to_string(),
            });
        };
        let updated = self.client().update_user(&user.id, update).await?;
        make_prefs().set_cached_profile(&updated);
        self.state.write().user = Some(updated.clone());
        Ok(updated)
    }

    /// Change the password; the server rotates the token and the session
    /// continues with the new one.
    pub async fn update_password(
        &mut self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let refresh = self
            .client()
            .update_password(current_password, new_password)
            .await?;
        make_prefs().set_auth_token(&refresh.token);
        self.state.write().token = Some(refresh.token);
        Ok(())
    }
}

/// Decide the bootstrap profile from the `/auth/me` result and the cache.
///
/// A bodyless success substitutes the cached profile; with no cache it is an
/// error. Any failure leaves the user unset but never invalidates the token —
/// a token whose profile fetch fails is treated as degraded, not expired.
fn profile_after_bootstrap(
    fetched: Result<User, ApiError>,
    cached: Option<User>,
) -> (Option<User>, Option<String>) {
    match fetched {
        Ok(user) => (Some(user), None),
        Err(err) if err.is_empty_body() => match cached {
            Some(user) => (Some(user), None),
            None => (None, Some("empty profile response and no cached copy".to_string())),
        },
        Err(err) => (None, Some(err.to_string())),
    }
}

/// Provider component that manages the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let session = use_context_provider(|| Session { state });

    // Rehydrate the profile for a stored token on mount.
    let _ = use_resource(move || async move {
        let mut session = session;
        let prefs = make_prefs();
        let Some(token) = prefs.auth_token() else {
            session.state.set(SessionState {
                user: None,
                token: None,
                loading: false,
            });
            return;
        };

        let client = ApiClient::new(store::config::resolve_api_base_url(&prefs))
            .with_token(Some(token.clone()));
        let fetched = client.me().await;
        let cached = prefs.cached_profile::<User>();
        let (user, error) = profile_after_bootstrap(fetched, cached);

        if let Some(ref user) = user {
            prefs.set_cached_profile(user);
        }
        if let Some(error) = error {
            tracing::warn!("profile bootstrap failed: {error}");
        }
        session.state.set(SessionState {
            user,
            token: Some(token),
            loading: false,
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_user(name: &str) -> User {
        User {
            id: "1".to_string(),
            name: name.to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_bootstrap_uses_fetched_profile() {
        let (user, error) = profile_after_bootstrap(Ok(fake_user("Fresh")), Some(fake_user("Stale")));
        assert_eq!(user.unwrap().name, "Fresh");
        assert!(error.is_none());
    }

    #[test]
    fn test_bootstrap_empty_body_falls_back_to_cache() {
        let (user, error) = profile_after_bootstrap(Err(ApiError::EmptyBody), Some(fake_user("Cached")));
        assert_eq!(user.unwrap().name, "Cached");
        assert!(error.is_none());
    }

    #[test]
    fn test_bootstrap_empty_body_without_cache_is_error() {
        let (user, error) = profile_after_bootstrap(Err(ApiError::EmptyBody), None);
        assert!(user.is_none());
        assert!(error.unwrap().contains("no cached copy"));
    }

    #[test]
    fn test_bootstrap_failure_reports_but_keeps_no_user() {
        let fetched = Err(ApiError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        let (user, error) = profile_after_bootstrap(fetched, Some(fake_user("Cached")));
        // A hard failure is not the 304 case; the cache is not substituted.
        assert!(user.is_none());
        assert_eq!(error.unwrap(), "Internal Server Error");
    }
}
