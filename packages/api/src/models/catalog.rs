//! # Affiliate-tool and video catalog models
//!
//! The two entity families managed from the admin panel. Both follow the row/`*Info`
//! split used throughout [`crate::models`], plus a `*Draft` struct that carries the
//! admin form payload for create and update. Drafts validate required-field presence
//! (and the 0–5 rating range) before any query runs, so an incomplete submission
//! never reaches the database.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

// ---- Affiliate tools ----

/// `affiliate_tools` table row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct AffiliateTool {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
    pub affiliate_link: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl AffiliateTool {
    pub fn to_info(&self) -> AffiliateToolInfo {
        AffiliateToolInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price,
            rating: self.rating,
            image: self.image.clone(),
            affiliate_link: self.affiliate_link.clone(),
            featured: self.featured,
        }
    }
}

/// A catalog entry linking to an external purchase page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffiliateToolInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
    pub affiliate_link: String,
    pub featured: bool,
}

/// Admin form payload for creating or updating an affiliate tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AffiliateToolDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub image: String,
    pub affiliate_link: String,
    pub featured: bool,
}

impl AffiliateToolDraft {
    /// Check required fields and the rating range. Returns the name of the first
    /// offending field so the admin form can surface it.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
            ("image", &self.image),
            ("affiliate link", &self.affiliate_link),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        if self.price < 0.0 {
            return Err("price must not be negative".into());
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err("rating must be between 0 and 5".into());
        }
        Ok(())
    }
}

impl AffiliateToolInfo {
    /// Reconstruct the form payload when editing an existing tool.
    pub fn to_draft(&self) -> AffiliateToolDraft {
        AffiliateToolDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price,
            rating: self.rating,
            image: self.image.clone(),
            affiliate_link: self.affiliate_link.clone(),
            featured: self.featured,
        }
    }
}

// ---- Videos ----

/// `videos` table row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_url: String,
    pub duration: String,
    pub views: String,
    pub platforms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Video {
    pub fn to_info(&self) -> VideoInfo {
        VideoInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.clone(),
            video_url: self.video_url.clone(),
            duration: self.duration.clone(),
            views: self.views.clone(),
            platforms: self.platforms.clone(),
        }
    }
}

/// A video tutorial published on one or more external platforms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_url: String,
    pub duration: String,
    /// Display label such as "125K", not a count.
    pub views: String,
    pub platforms: Vec<String>,
}

impl VideoInfo {
    /// Reconstruct the form payload when editing an existing video.
    pub fn to_draft(&self) -> VideoDraft {
        VideoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.clone(),
            video_url: self.video_url.clone(),
            duration: self.duration.clone(),
            views: self.views.clone(),
            platforms: self.platforms.clone(),
        }
    }
}

/// Admin form payload for creating or updating a video.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_url: String,
    pub duration: String,
    pub views: String,
    pub platforms: Vec<String>,
}

impl VideoDraft {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("thumbnail", &self.thumbnail),
            ("video URL", &self.video_url),
            ("duration", &self.duration),
            ("views", &self.views),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        Ok(())
    }

    /// Drop duplicate platform tags, keeping first occurrence order.
    pub fn dedup_platforms(&mut self) {
        let mut seen = Vec::with_capacity(self.platforms.len());
        self.platforms.retain(|p| {
            if seen.contains(p) {
                false
            } else {
                seen.push(p.clone());
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_draft() -> AffiliateToolDraft {
        AffiliateToolDraft {
            name: "Anti-Static Wrist Strap".into(),
            description: "Grounding strap for safe handling of components".into(),
            category: "Safety".into(),
            price: 8.99,
            rating: 4.5,
            image: "https://example.com/strap.jpg".into(),
            affiliate_link: "https://amazon.com/dp/B000".into(),
            featured: false,
        }
    }

    #[test]
    fn test_valid_tool_draft_passes() {
        assert!(tool_draft().validate().is_ok());
    }

    #[test]
    fn test_tool_draft_rejects_missing_fields() {
        let mut draft = tool_draft();
        draft.name = "  ".into();
        assert_eq!(draft.validate().unwrap_err(), "name is required");

        let mut draft = tool_draft();
        draft.affiliate_link.clear();
        assert!(draft.validate().unwrap_err().contains("affiliate link"));
    }

    #[test]
    fn test_tool_draft_rejects_out_of_range_rating() {
        let mut draft = tool_draft();
        draft.rating = 5.1;
        assert!(draft.validate().is_err());
        draft.rating = -0.1;
        assert!(draft.validate().is_err());
        draft.rating = 5.0;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_video_draft_requires_title() {
        let mut draft = VideoDraft {
            title: "First Build Walkthrough".into(),
            description: "Step by step assembly".into(),
            thumbnail: "https://example.com/t.jpg".into(),
            video_url: "https://youtube.com/watch?v=abc".into(),
            duration: "12:30".into(),
            views: "125K".into(),
            platforms: vec!["YouTube".into()],
        };
        assert!(draft.validate().is_ok());
        draft.title.clear();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_dedup_platforms_keeps_order() {
        let mut draft = VideoDraft {
            platforms: vec![
                "YouTube".into(),
                "TikTok".into(),
                "YouTube".into(),
                "Instagram".into(),
                "TikTok".into(),
            ],
            ..Default::default()
        };
        draft.dedup_platforms();
        assert_eq!(draft.platforms, vec!["YouTube", "TikTok", "Instagram"]);
    }
}
