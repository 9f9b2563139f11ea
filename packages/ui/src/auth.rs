//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] is the session manager: it runs the bootstrap sequence once
//! on mount, owns the only copy of the signed-in member's profile, and exposes
//! it to every page through Dioxus context. The three states are loading (the
//! bootstrap is still in flight), anonymous (`user` is `None`), and
//! authenticated; login and logout are the only transitions after bootstrap.

use api::UserInfo;
use dioxus::prelude::*;

use crate::{analytics, browser};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True once the bootstrap has settled with no member signed in. Gated
    /// pages redirect on this, never while `loading` is still true.
    pub fn is_anonymous(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

/// The state a sign-out leaves behind, paired with any backend error for the
/// caller to log. The member ends up signed out locally no matter what the
/// backend said.
fn state_after_logout<E>(result: Result<(), E>) -> (AuthState, Option<E>) {
    (
        AuthState {
            user: None,
            loading: false,
        },
        result.err(),
    )
}

/// Get the current authentication state.
/// Returns a signal that updates when the member signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Extract the one-time session id from a URL fragment left by the auth broker.
/// The broker redirects to `<target>#session_id=<id>`; other fragment pairs may
/// surround it.
pub fn session_id_from_fragment(hash: &str) -> Option<String> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    fragment
        .split('&')
        .find_map(|pair| pair.strip_prefix("session_id="))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Bootstrap once on mount: redeem a broker fragment if present, otherwise
    // ask whether a cookie session already exists.
    let _ = use_resource(move || async move {
        let fragment_id = browser::location_hash()
            .as_deref()
            .and_then(session_id_from_fragment);

        if let Some(session_id) = fragment_id {
            // Strip the token from the visible URL before the exchange so a
            // reload can never replay it.
            browser::strip_fragment();

            match api::exchange_session(session_id).await {
                Ok(user) => {
                    analytics::track_sign_in();
                    auth_state.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                }
                Err(e) => {
                    tracing::error!("session exchange failed: {e}");
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                }
            }
            return;
        }

        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(e) => {
                // No valid cookie is the normal anonymous case, not a failure.
                tracing::debug!("no existing session: {e}");
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Send the browser to the auth broker, asking to land on the dashboard
/// afterwards.
pub async fn redirect_to_login() {
    let Some(origin) = browser::origin() else {
        return;
    };
    let target = format!("{origin}/dashboard");

    match api::login_redirect_url(target).await {
        Ok(url) => browser::navigate_to(&url),
        Err(e) => tracing::error!("failed to get login URL: {e}"),
    }
}

/// End the session. Local state clears even when the backend call fails; the
/// failure is only logged.
pub async fn sign_out(mut auth_state: Signal<AuthState>) {
    let (next, err) = state_after_logout(api::logout().await);
    if let Some(e) = err {
        tracing::error!("logout request failed: {e}");
    }

    auth_state.set(next);
    analytics::track_sign_out();
    browser::navigate_to("/");
}

/// Button that starts the broker login round trip.
#[component]
pub fn SignInButton(
    #[props(default = "Sign In".to_string())] label: String,
    #[props(default = "btn-primary".to_string())] class: String,
) -> Element {
    let mut busy = use_signal(|| false);

    let onclick = move |_| async move {
        busy.set(true);
        redirect_to_login().await;
        busy.set(false);
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            if busy() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button that signs the current member out.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "btn-secondary".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| async move { sign_out(auth_state).await },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_with_token_only() {
        assert_eq!(
            session_id_from_fragment("#session_id=abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_fragment_with_surrounding_pairs() {
        assert_eq!(
            session_id_from_fragment("#state=xyz&session_id=tok&extra=1").as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_fragment_without_token() {
        assert_eq!(session_id_from_fragment("#learning-paths"), None);
        assert_eq!(session_id_from_fragment(""), None);
    }

    #[test]
    fn test_empty_token_is_ignored() {
        assert_eq!(session_id_from_fragment("#session_id="), None);
    }

    #[test]
    fn test_missing_hash_prefix_is_tolerated() {
        assert_eq!(
            session_id_from_fragment("session_id=tok").as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_logout_success_clears_state() {
        let (state, err) = state_after_logout(Ok::<(), String>(()));
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert!(err.is_none());
    }

    #[test]
    fn test_logout_failure_still_clears_state() {
        let (state, err) = state_after_logout(Err::<(), String>("backend down".into()));
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(err.as_deref(), Some("backend down"));
    }

    #[test]
    fn test_anonymous_only_after_bootstrap_settles() {
        assert!(!AuthState::default().is_anonymous());
        let settled = AuthState {
            user: None,
            loading: false,
        };
        assert!(settled.is_anonymous());
    }
}
