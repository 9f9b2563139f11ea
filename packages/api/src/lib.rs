//! # API crate — shared fullstack server functions for LinkAndLearnLabs
//!
//! This crate is the backbone of the fullstack architecture. It defines every
//! Dioxus server function the web frontend calls, along with the supporting
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session-id exchange with the external OAuth broker, session management |
//! | [`catalog`] | — | Admin CRUD for affiliate tools and videos |
//! | [`content`] | — | Learning paths, builds, events, and forum endpoints |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and seeding |
//! | [`models`] | — | Database rows and their client-safe `*Info` projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` annotated with `#[get(...)]` or `#[post(...)]` is a
//! Dioxus server function, compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP with credentials.
//!
//! - **Authentication** (this file): `exchange_session`, `get_current_user`,
//!   `login_redirect_url`, `logout`
//! - **Community content** ([`content`]): listing plus enroll/like/register/reply
//!   actions forwarded verbatim to the database
//! - **Catalog** ([`catalog`]): create/update/delete for the resources directory

use dioxus::prelude::*;

pub mod auth;
pub mod catalog;
pub mod content;
pub mod db;
pub mod models;

pub use catalog::*;
pub use content::*;
pub use models::{
    AffiliateToolDraft, AffiliateToolInfo, BuildDraft, BuildInfo, EventInfo, ForumReplyInfo,
    ForumTopicDraft, ForumTopicInfo, LearningPathInfo, UserInfo, VideoDraft, VideoInfo,
};

/// Exchange a one-time broker session id for a member profile and a durable
/// cookie-backed session. The id arrives in the redirect URL fragment and is
/// redeemable exactly once.
#[cfg(feature = "server")]
#[post("/api/auth/session", session: tower_sessions::Session)]
pub async fn exchange_session(session_id: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let broker = auth::BrokerClient::from_env();
    let profile = broker.session_data(&session_id).await.map_err(|e| {
        tracing::warn!("session exchange failed: {e}");
        ServerFnError::new("Invalid session id")
    })?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Returning members keep their counters; the profile fields refresh.
    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (email, name, avatar_url)
        VALUES ($1, $2, $3)
        ON CONFLICT (email)
        DO UPDATE SET
            name = EXCLUDED.name,
            avatar_url = EXCLUDED.avatar_url,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(&profile.email)
    .bind(&profile.name)
    .bind(&profile.picture)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_BROKER_TOKEN_KEY, profile.session_token.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/session")]
pub async fn exchange_session(session_id: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the current authenticated member from the session. `Ok(None)` means no
/// valid session exists, which is an expected outcome, not an error.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Build the broker login URL for a given post-login redirect target. The
/// broker base URL lives in server configuration; the client only supplies
/// where it wants to land afterwards.
#[cfg(feature = "server")]
#[get("/api/auth/login-url")]
pub async fn login_redirect_url(redirect: String) -> Result<String, ServerFnError> {
    let broker = auth::BrokerClient::from_env();
    broker.login_url(&redirect).map_err(ServerFnError::new)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login-url")]
pub async fn login_redirect_url(redirect: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current member by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Analytics measurement id for the client-side tracker. `None` when the
/// deployment has no id configured; tracking stays disabled in that case.
#[cfg(feature = "server")]
#[get("/api/config/analytics")]
pub async fn analytics_measurement_id() -> Result<Option<String>, ServerFnError> {
    dotenvy::dotenv().ok();
    Ok(std::env::var("GA_MEASUREMENT_ID")
        .ok()
        .filter(|id| !id.is_empty()))
}

#[cfg(not(feature = "server"))]
#[get("/api/config/analytics")]
pub async fn analytics_measurement_id() -> Result<Option<String>, ServerFnError> {
    Ok(None)
}
