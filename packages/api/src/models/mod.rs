//! Data models for the application.

mod catalog;
mod content;
mod user;

#[cfg(feature = "server")]
pub use catalog::{AffiliateTool, Video};
pub use catalog::{AffiliateToolDraft, AffiliateToolInfo, VideoDraft, VideoInfo};

#[cfg(feature = "server")]
pub use content::{Build, Event, ForumReply, ForumTopic, LearningPath};
pub use content::{
    BuildDraft, BuildInfo, EventInfo, ForumReplyInfo, ForumTopicDraft, ForumTopicInfo,
    LearningPathInfo,
};

#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
