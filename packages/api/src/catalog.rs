//! # Catalog server functions — admin CRUD
//!
//! Create, update, and delete for the resources directory: affiliate tools and
//! video tutorials. Reads are public (the Resources page is unauthenticated);
//! every mutation requires a session. Drafts are validated before the first
//! query so an incomplete form never touches the database.

use dioxus::prelude::*;

use crate::models::{AffiliateToolDraft, AffiliateToolInfo, VideoDraft, VideoInfo};

#[cfg(feature = "server")]
use crate::auth::session_user;
#[cfg(feature = "server")]
use crate::db::get_pool;
#[cfg(feature = "server")]
use crate::models::{AffiliateTool, Video};

// ---- Affiliate tools ----

/// Featured tools first, then newest.
#[cfg(feature = "server")]
#[get("/api/affiliate-tools")]
pub async fn list_affiliate_tools() -> Result<Vec<AffiliateToolInfo>, ServerFnError> {
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let tools: Vec<AffiliateTool> =
        sqlx::query_as("SELECT * FROM affiliate_tools ORDER BY featured DESC, created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(tools.iter().map(AffiliateTool::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/affiliate-tools")]
pub async fn list_affiliate_tools() -> Result<Vec<AffiliateToolInfo>, ServerFnError> {
    Ok(Vec::new())
}

#[cfg(feature = "server")]
#[post("/api/affiliate-tools", session: tower_sessions::Session)]
pub async fn create_affiliate_tool(
    draft: AffiliateToolDraft,
) -> Result<AffiliateToolInfo, ServerFnError> {
    let _user = session_user(&session).await?;
    draft.validate().map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let tool: AffiliateTool = sqlx::query_as(
        "INSERT INTO affiliate_tools (name, description, category, price, rating, image, affiliate_link, featured)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(&draft.name)
    .bind(&draft.description)
    .bind(&draft.category)
    .bind(draft.price)
    .bind(draft.rating)
    .bind(&draft.image)
    .bind(&draft.affiliate_link)
    .bind(draft.featured)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(tool.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/affiliate-tools")]
pub async fn create_affiliate_tool(
    draft: AffiliateToolDraft,
) -> Result<AffiliateToolInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/affiliate-tools/update", session: tower_sessions::Session)]
pub async fn update_affiliate_tool(
    id: String,
    draft: AffiliateToolDraft,
) -> Result<AffiliateToolInfo, ServerFnError> {
    let _user = session_user(&session).await?;
    draft.validate().map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let tool_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let tool: Option<AffiliateTool> = sqlx::query_as(
        "UPDATE affiliate_tools
         SET name = $2, description = $3, category = $4, price = $5, rating = $6,
             image = $7, affiliate_link = $8, featured = $9
         WHERE id = $1
         RETURNING *",
    )
    .bind(tool_uuid)
    .bind(&draft.name)
    .bind(&draft.description)
    .bind(&draft.category)
    .bind(draft.price)
    .bind(draft.rating)
    .bind(&draft.image)
    .bind(&draft.affiliate_link)
    .bind(draft.featured)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tool.map(|t| t.to_info())
        .ok_or_else(|| ServerFnError::new("Tool not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/affiliate-tools/update")]
pub async fn update_affiliate_tool(
    id: String,
    draft: AffiliateToolDraft,
) -> Result<AffiliateToolInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/affiliate-tools/delete", session: tower_sessions::Session)]
pub async fn delete_affiliate_tool(id: String) -> Result<(), ServerFnError> {
    let _user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let tool_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM affiliate_tools WHERE id = $1")
        .bind(tool_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Tool not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/affiliate-tools/delete")]
pub async fn delete_affiliate_tool(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- Videos ----

#[cfg(feature = "server")]
#[get("/api/videos")]
pub async fn list_videos() -> Result<Vec<VideoInfo>, ServerFnError> {
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let videos: Vec<Video> = sqlx::query_as("SELECT * FROM videos ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(videos.iter().map(Video::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/videos")]
pub async fn list_videos() -> Result<Vec<VideoInfo>, ServerFnError> {
    Ok(Vec::new())
}

#[cfg(feature = "server")]
#[post("/api/videos", session: tower_sessions::Session)]
pub async fn create_video(draft: VideoDraft) -> Result<VideoInfo, ServerFnError> {
    let _user = session_user(&session).await?;
    let mut draft = draft;
    draft.validate().map_err(ServerFnError::new)?;
    draft.dedup_platforms();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let video: Video = sqlx::query_as(
        "INSERT INTO videos (title, description, thumbnail, video_url, duration, views, platforms)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.thumbnail)
    .bind(&draft.video_url)
    .bind(&draft.duration)
    .bind(&draft.views)
    .bind(&draft.platforms)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(video.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/videos")]
pub async fn create_video(draft: VideoDraft) -> Result<VideoInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/videos/update", session: tower_sessions::Session)]
pub async fn update_video(id: String, draft: VideoDraft) -> Result<VideoInfo, ServerFnError> {
    let _user = session_user(&session).await?;
    let mut draft = draft;
    draft.validate().map_err(ServerFnError::new)?;
    draft.dedup_platforms();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let video_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let video: Option<Video> = sqlx::query_as(
        "UPDATE videos
         SET title = $2, description = $3, thumbnail = $4, video_url = $5,
             duration = $6, views = $7, platforms = $8
         WHERE id = $1
         RETURNING *",
    )
    .bind(video_uuid)
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.thumbnail)
    .bind(&draft.video_url)
    .bind(&draft.duration)
    .bind(&draft.views)
    .bind(&draft.platforms)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    video
        .map(|v| v.to_info())
        .ok_or_else(|| ServerFnError::new("Video not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/videos/update")]
pub async fn update_video(id: String, draft: VideoDraft) -> Result<VideoInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/videos/delete", session: tower_sessions::Session)]
pub async fn delete_video(id: String) -> Result<(), ServerFnError> {
    let _user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let video_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM videos WHERE id = $1")
        .bind(video_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Video not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/videos/delete")]
pub async fn delete_video(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
