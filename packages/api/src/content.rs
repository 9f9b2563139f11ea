//! # Community content server functions
//!
//! List endpoints for learning paths, builds, events, and forum topics, plus the
//! member actions (enroll, like, register, reply) forwarded verbatim to the
//! database. List endpoints are public; actions require an authenticated session
//! and return the updated entity so the calling view can refresh in place.

use dioxus::prelude::*;

use crate::models::{
    BuildDraft, BuildInfo, EventInfo, ForumReplyInfo, ForumTopicDraft, ForumTopicInfo,
    LearningPathInfo,
};

#[cfg(feature = "server")]
use crate::auth::session_user;
#[cfg(feature = "server")]
use crate::db::get_pool;
#[cfg(feature = "server")]
use crate::models::{Build, Event, ForumReply, ForumTopic, LearningPath};

// ---- Learning paths ----

#[cfg(feature = "server")]
#[get("/api/learning-paths")]
pub async fn list_learning_paths() -> Result<Vec<LearningPathInfo>, ServerFnError> {
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let paths: Vec<LearningPath> =
        sqlx::query_as("SELECT * FROM learning_paths ORDER BY enrolled DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(paths.iter().map(LearningPath::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/learning-paths")]
pub async fn list_learning_paths() -> Result<Vec<LearningPathInfo>, ServerFnError> {
    Ok(Vec::new())
}

/// Enroll the current member in a learning path and return the updated path.
#[cfg(feature = "server")]
#[post("/api/learning-paths/enroll", session: tower_sessions::Session)]
pub async fn enroll_learning_path(path_id: String) -> Result<LearningPathInfo, ServerFnError> {
    let _user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let path_uuid =
        uuid::Uuid::parse_str(&path_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let path: Option<LearningPath> = sqlx::query_as(
        "UPDATE learning_paths SET enrolled = enrolled + 1 WHERE id = $1 RETURNING *",
    )
    .bind(path_uuid)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    path.map(|p| p.to_info())
        .ok_or_else(|| ServerFnError::new("Learning path not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/learning-paths/enroll")]
pub async fn enroll_learning_path(path_id: String) -> Result<LearningPathInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- Builds ----

/// Most recent builds first.
#[cfg(feature = "server")]
#[get("/api/builds")]
pub async fn list_builds(limit: i64, offset: i64) -> Result<Vec<BuildInfo>, ServerFnError> {
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let builds: Vec<Build> =
        sqlx::query_as("SELECT * FROM builds ORDER BY date DESC LIMIT $1 OFFSET $2")
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(builds.iter().map(Build::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/builds")]
pub async fn list_builds(limit: i64, offset: i64) -> Result<Vec<BuildInfo>, ServerFnError> {
    Ok(Vec::new())
}

/// Share a new build. The builder's name comes from the session; the member's
/// builds counter increments alongside.
#[cfg(feature = "server")]
#[post("/api/builds", session: tower_sessions::Session)]
pub async fn create_build(draft: BuildDraft) -> Result<BuildInfo, ServerFnError> {
    let user = session_user(&session).await?;

    if draft.title.trim().is_empty() || draft.image.trim().is_empty() {
        return Err(ServerFnError::new("title and image are required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let build: Build = sqlx::query_as(
        "INSERT INTO builds (title, builder, builder_id, image, specs)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&draft.title)
    .bind(&user.name)
    .bind(user.id)
    .bind(&draft.image)
    .bind(&draft.specs)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE users SET builds_shared = builds_shared + 1 WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(build.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/builds")]
pub async fn create_build(draft: BuildDraft) -> Result<BuildInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/builds/like", session: tower_sessions::Session)]
pub async fn like_build(build_id: String) -> Result<BuildInfo, ServerFnError> {
    let _user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let build_uuid =
        uuid::Uuid::parse_str(&build_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let build: Option<Build> =
        sqlx::query_as("UPDATE builds SET likes = likes + 1 WHERE id = $1 RETURNING *")
            .bind(build_uuid)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    build
        .map(|b| b.to_info())
        .ok_or_else(|| ServerFnError::new("Build not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/builds/like")]
pub async fn like_build(build_id: String) -> Result<BuildInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- Events ----

#[cfg(feature = "server")]
#[get("/api/events")]
pub async fn list_events() -> Result<Vec<EventInfo>, ServerFnError> {
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let events: Vec<Event> = sqlx::query_as("SELECT * FROM events ORDER BY date")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(events.iter().map(Event::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/events")]
pub async fn list_events() -> Result<Vec<EventInfo>, ServerFnError> {
    Ok(Vec::new())
}

/// Register the current member for an event. Rejects duplicate registration and
/// full events. The capacity and membership checks run inside the UPDATE's
/// predicate so two concurrent registrations cannot both take the last seat.
#[cfg(feature = "server")]
#[post("/api/events/register", session: tower_sessions::Session)]
pub async fn register_event(event_id: String) -> Result<EventInfo, ServerFnError> {
    let user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let event_uuid =
        uuid::Uuid::parse_str(&event_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: Option<Event> = sqlx::query_as(
        r#"
        UPDATE events
        SET attendees = attendees + 1,
            registered_users = array_append(registered_users, $2)
        WHERE id = $1
          AND NOT ($2 = ANY(registered_users))
          AND attendees < max_attendees
        RETURNING *
        "#,
    )
    .bind(event_uuid)
    .bind(user.id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some(event) = updated {
        return Ok(event.to_info());
    }

    // The guarded update matched nothing; fetch the row to report why.
    let event: Option<Event> = sqlx::query_as("SELECT * FROM events WHERE id = $1")
        .bind(event_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match event {
        None => Err(ServerFnError::new("Event not found")),
        Some(e) if e.registered_users.contains(&user.id) => {
            Err(ServerFnError::new("Already registered"))
        }
        Some(_) => Err(ServerFnError::new("Event is full")),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/events/register")]
pub async fn register_event(event_id: String) -> Result<EventInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- Forum ----

/// Topics ordered by most recent activity, optionally filtered by category.
#[cfg(feature = "server")]
#[get("/api/forum/topics")]
pub async fn list_forum_topics(
    category: Option<String>,
    limit: i64,
    offset: i64,
) -> Result<Vec<ForumTopicInfo>, ServerFnError> {
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let topics: Vec<ForumTopic> = match category {
        Some(category) => sqlx::query_as(
            "SELECT * FROM forum_topics WHERE category = $1
             ORDER BY last_activity DESC LIMIT $2 OFFSET $3",
        )
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
        None => sqlx::query_as(
            "SELECT * FROM forum_topics ORDER BY last_activity DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(topics.iter().map(ForumTopic::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/forum/topics")]
pub async fn list_forum_topics(
    category: Option<String>,
    limit: i64,
    offset: i64,
) -> Result<Vec<ForumTopicInfo>, ServerFnError> {
    Ok(Vec::new())
}

#[cfg(feature = "server")]
#[post("/api/forum/topics", session: tower_sessions::Session)]
pub async fn create_forum_topic(draft: ForumTopicDraft) -> Result<ForumTopicInfo, ServerFnError> {
    let user = session_user(&session).await?;

    if draft.title.trim().is_empty() || draft.category.trim().is_empty() {
        return Err(ServerFnError::new("title and category are required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let topic: ForumTopic = sqlx::query_as(
        "INSERT INTO forum_topics (title, author, author_id, category)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&draft.title)
    .bind(&user.name)
    .bind(user.id)
    .bind(&draft.category)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(topic.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/forum/topics")]
pub async fn create_forum_topic(draft: ForumTopicDraft) -> Result<ForumTopicInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Post a reply and bump the topic's reply count and activity timestamp.
#[cfg(feature = "server")]
#[post("/api/forum/topics/reply", session: tower_sessions::Session)]
pub async fn reply_to_topic(
    topic_id: String,
    content: String,
) -> Result<ForumReplyInfo, ServerFnError> {
    let user = session_user(&session).await?;

    if content.trim().is_empty() {
        return Err(ServerFnError::new("content is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let topic_uuid =
        uuid::Uuid::parse_str(&topic_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let exists: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM forum_topics WHERE id = $1")
        .bind(topic_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if exists.is_none() {
        return Err(ServerFnError::new("Topic not found"));
    }

    let reply: ForumReply = sqlx::query_as(
        "INSERT INTO forum_replies (topic_id, author, author_id, content)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(topic_uuid)
    .bind(&user.name)
    .bind(user.id)
    .bind(&content)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE forum_topics SET replies = replies + 1, last_activity = NOW() WHERE id = $1",
    )
    .bind(topic_uuid)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(reply.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/forum/topics/reply")]
pub async fn reply_to_topic(
    topic_id: String,
    content: String,
) -> Result<ForumReplyInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
