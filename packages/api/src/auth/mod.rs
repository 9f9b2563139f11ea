//! Authentication module for the external OAuth broker.

#[cfg(feature = "server")]
mod broker;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use broker::{BrokerClient, BrokerError, BrokerProfile};
#[cfg(feature = "server")]
pub use config::BrokerConfig;
#[cfg(feature = "server")]
pub use session::{SESSION_BROKER_TOKEN_KEY, SESSION_USER_ID_KEY};

/// Load the authenticated user for the current session, or fail with a 401-style
/// server function error. Shared by every server function that requires a member.
#[cfg(feature = "server")]
pub(crate) async fn session_user(
    session: &tower_sessions::Session,
) -> Result<crate::models::User, dioxus::prelude::ServerFnError> {
    use dioxus::prelude::ServerFnError;

    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = crate::db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<crate::models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}
