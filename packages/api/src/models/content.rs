//! # Community content models
//!
//! Read-mostly display entities fetched from the backend list endpoints: learning
//! paths, featured builds, events, and forum topics/replies. Each entity follows the
//! same split as [`crate::models::UserInfo`]: a server-only row struct deriving
//! [`sqlx::FromRow`] (Uuid ids, chrono timestamps) and a client-safe `*Info`
//! projection that crosses the server function boundary with String ids.
//!
//! The `*Draft` structs are the create payloads submitted from the dashboard and
//! forum forms; the backend fills in authorship from the session.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

// ---- Learning paths ----

/// `learning_paths` table row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct LearningPath {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub modules: i32,
    pub enrolled: i32,
}

#[cfg(feature = "server")]
impl LearningPath {
    pub fn to_info(&self) -> LearningPathInfo {
        LearningPathInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty.clone(),
            duration: self.duration.clone(),
            modules: self.modules,
            enrolled: self.enrolled,
        }
    }
}

/// A structured course shown on the home page and dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningPathInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration: String,
    pub modules: i32,
    pub enrolled: i32,
}

// ---- Builds ----

/// `builds` table row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Build {
    pub id: Uuid,
    pub title: String,
    pub builder: String,
    pub builder_id: Uuid,
    pub image: String,
    pub specs: String,
    pub likes: i32,
    pub date: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Build {
    pub fn to_info(&self) -> BuildInfo {
        BuildInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            builder: self.builder.clone(),
            image: self.image.clone(),
            specs: self.specs.clone(),
            likes: self.likes,
            date: self.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// A community PC build shared by a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildInfo {
    pub id: String,
    pub title: String,
    pub builder: String,
    pub image: String,
    pub specs: String,
    pub likes: i32,
    pub date: String,
}

/// Create payload for a new build; the builder comes from the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildDraft {
    pub title: String,
    pub image: String,
    pub specs: String,
}

// ---- Events ----

/// `events` table row. `registered_users` backs the duplicate-registration check
/// and never reaches the client.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image: String,
    pub attendees: i32,
    pub max_attendees: i32,
    pub description: String,
    pub registered_users: Vec<Uuid>,
}

#[cfg(feature = "server")]
impl Event {
    pub fn to_info(&self) -> EventInfo {
        EventInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            image: self.image.clone(),
            attendees: self.attendees,
            max_attendees: self.max_attendees,
            description: self.description.clone(),
        }
    }
}

/// A community event with registration capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventInfo {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image: String,
    pub attendees: i32,
    pub max_attendees: i32,
    pub description: String,
}

impl EventInfo {
    pub fn is_full(&self) -> bool {
        self.attendees >= self.max_attendees
    }
}

// ---- Forum ----

/// `forum_topics` table row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ForumTopic {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub author_id: Uuid,
    pub category: String,
    pub replies: i32,
    pub views: i32,
    pub last_activity: DateTime<Utc>,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ForumTopic {
    pub fn to_info(&self) -> ForumTopicInfo {
        ForumTopicInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            replies: self.replies,
            views: self.views,
            last_activity: self.last_activity.format("%Y-%m-%d %H:%M").to_string(),
            is_pinned: self.is_pinned,
        }
    }
}

/// A forum discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumTopicInfo {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub replies: i32,
    pub views: i32,
    pub last_activity: String,
    pub is_pinned: bool,
}

/// Create payload for a new topic; authorship comes from the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumTopicDraft {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// `forum_replies` table row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ForumReply {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub author: String,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ForumReply {
    pub fn to_info(&self) -> ForumReplyInfo {
        ForumReplyInfo {
            id: self.id.to_string(),
            topic_id: self.topic_id.to_string(),
            author: self.author.clone(),
            content: self.content.clone(),
        }
    }
}

/// A reply posted under a forum topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForumReplyInfo {
    pub id: String,
    pub topic_id: String,
    pub author: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(attendees: i32, max_attendees: i32) -> EventInfo {
        EventInfo {
            id: "e1".into(),
            title: "Workshop".into(),
            date: "2025-02-15".into(),
            time: "14:00 EST".into(),
            location: "Online".into(),
            image: String::new(),
            attendees,
            max_attendees,
            description: String::new(),
        }
    }

    #[test]
    fn test_event_full_at_capacity() {
        assert!(event(50, 50).is_full());
        assert!(!event(49, 50).is_full());
    }
}
