//! Public resources directory: recommended tools with affiliate links and a
//! curated video library. Outbound clicks are reported to analytics before
//! the browser follows the link.

use dioxus::prelude::*;

use api::{AffiliateToolInfo, VideoInfo};
use ui::analytics;

#[component]
pub fn Resources() -> Element {
    let mut tools = use_signal(Vec::<AffiliateToolInfo>::new);
    let mut videos = use_signal(Vec::<VideoInfo>::new);
    let mut tab = use_signal(|| "tools");

    use_effect(|| analytics::track_page_view("/resources", "Resources"));

    let _loader = use_resource(move || async move {
        match api::list_affiliate_tools().await {
            Ok(list) => tools.set(list),
            Err(e) => tracing::error!("failed to load affiliate tools: {e}"),
        }
        match api::list_videos().await {
            Ok(list) => videos.set(list),
            Err(e) => tracing::error!("failed to load videos: {e}"),
        }
    });

    rsx! {
        div {
            class: "resources-page container",
            header {
                class: "page-header",
                h1 { "Resources" }
                p { "Hand-picked tools and tutorials to level up your next build" }
            }

            nav {
                class: "tab-bar",
                button {
                    class: if tab() == "tools" { "tab active" } else { "tab" },
                    onclick: move |_| tab.set("tools"),
                    "Recommended Tools"
                }
                button {
                    class: if tab() == "videos" { "tab active" } else { "tab" },
                    onclick: move |_| tab.set("videos"),
                    "Video Library"
                }
            }

            if tab() == "tools" {
                if tools().is_empty() {
                    p { class: "empty-state", "No tools listed yet." }
                }
                div {
                    class: "card-grid",
                    for tool in tools() {
                        ToolCard { key: "{tool.id}", tool: tool.clone() }
                    }
                }
                p {
                    class: "disclosure",
                    "As an affiliate partner we may earn a commission from qualifying purchases, at no extra cost to you."
                }
            } else {
                if videos().is_empty() {
                    p { class: "empty-state", "No videos published yet." }
                }
                div {
                    class: "card-grid",
                    for video in videos() {
                        VideoCard { key: "{video.id}", video: video.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ToolCard(tool: AffiliateToolInfo) -> Element {
    let stars = "\u{2605}".repeat(tool.rating.floor() as usize);
    rsx! {
        div {
            class: "card tool-card",
            if tool.featured {
                span { class: "badge featured", "Featured" }
            }
            img { class: "card-image", src: "{tool.image}", alt: "{tool.name}" }
            div {
                class: "card-body",
                span { class: "caption", "{tool.category}" }
                h3 { "{tool.name}" }
                p { "{tool.description}" }
                div {
                    class: "card-meta",
                    span { class: "rating", "{stars} {tool.rating:.1}" }
                    span { class: "price", "${tool.price:.2}" }
                }
                a {
                    class: "btn-primary",
                    href: "{tool.affiliate_link}",
                    target: "_blank",
                    rel: "noopener noreferrer sponsored",
                    onclick: {
                        let tool = tool.clone();
                        move |_| analytics::track_affiliate_click(&tool.name, &tool.id, tool.price)
                    },
                    "View Deal"
                }
            }
        }
    }
}

#[component]
fn VideoCard(video: VideoInfo) -> Element {
    rsx! {
        div {
            class: "card video-card",
            div {
                class: "thumb-wrap",
                img { class: "card-image", src: "{video.thumbnail}", alt: "{video.title}" }
                span { class: "duration", "{video.duration}" }
            }
            div {
                class: "card-body",
                h3 { "{video.title}" }
                p { "{video.description}" }
                div {
                    class: "card-meta",
                    span { class: "caption", "{video.views} views" }
                    div {
                        class: "platform-badges",
                        for platform in video.platforms.clone() {
                            span { class: "badge platform", "{platform}" }
                        }
                    }
                }
                a {
                    class: "btn-secondary",
                    href: "{video.video_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: {
                        let video = video.clone();
                        move |_| {
                            let platform = video.platforms.first().map(String::as_str).unwrap_or("unknown");
                            analytics::track_video_click(&video.title, &video.id, platform);
                        }
                    },
                    "Watch"
                }
            }
        }
    }
}
