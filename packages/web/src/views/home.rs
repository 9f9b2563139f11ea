//! Marketing home page: hero, community stats, and previews of every content
//! family. All lists come straight from the backend; an empty collection
//! renders its section's empty state rather than hiding the section.

use dioxus::prelude::*;

use api::{BuildInfo, EventInfo, ForumTopicInfo, LearningPathInfo};
use ui::analytics;

const HERO_IMAGE: &str = "https://images.pexels.com/photos/7199194/pexels-photo-7199194.jpeg";

#[component]
pub fn Home() -> Element {
    let mut builds = use_signal(Vec::<BuildInfo>::new);
    let mut paths = use_signal(Vec::<LearningPathInfo>::new);
    let mut events = use_signal(Vec::<EventInfo>::new);
    let mut topics = use_signal(Vec::<ForumTopicInfo>::new);
    let nav = use_navigator();

    use_effect(|| analytics::track_page_view("/", "Home"));

    let _loader = use_resource(move || async move {
        match api::list_builds(4, 0).await {
            Ok(list) => builds.set(list),
            Err(e) => tracing::error!("failed to load builds: {e}"),
        }
        match api::list_learning_paths().await {
            Ok(list) => paths.set(list),
            Err(e) => tracing::error!("failed to load learning paths: {e}"),
        }
        match api::list_events().await {
            Ok(list) => events.set(list),
            Err(e) => tracing::error!("failed to load events: {e}"),
        }
        match api::list_forum_topics(None, 5, 0).await {
            Ok(list) => topics.set(list),
            Err(e) => tracing::error!("failed to load forum topics: {e}"),
        }
    });

    rsx! {
        div {
            class: "home-page",

            section {
                class: "hero-section",
                img { class: "hero-image", src: HERO_IMAGE, alt: "Tech workspace" }
                div { class: "hero-overlay" }
                div {
                    class: "hero-content",
                    h1 { class: "hero-title", "Build. Learn. Connect." }
                    p {
                        class: "hero-tagline",
                        "Join our inclusive community dedicated to computer building, gaming rigs, and tech education"
                    }
                    div {
                        class: "hero-actions",
                        button {
                            class: "btn-primary",
                            onclick: move |_| {
                                analytics::track_cta("Get Started", "hero");
                                nav.push("/dashboard");
                            },
                            "Get Started"
                        }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| {
                                analytics::track_cta("Explore Resources", "hero");
                                nav.push("/resources");
                            },
                            "Explore Resources"
                        }
                    }
                }
            }

            section {
                class: "stats-section",
                div {
                    class: "container stats-grid",
                    StatCard { value: "2,500+", label: "Community Members" }
                    StatCard { value: "1,200+", label: "Builds Shared" }
                    StatCard { value: "50+", label: "Learning Courses" }
                    StatCard { value: "Weekly", label: "Live Events" }
                }
            }

            section {
                class: "content-section",
                div {
                    class: "container",
                    h2 { "Featured Builds" }
                    p { class: "section-subtitle", "Check out amazing PC builds from our community" }
                    if builds().is_empty() {
                        p { class: "empty-state", "No builds shared yet. Be the first!" }
                    } else {
                        div {
                            class: "card-grid",
                            for build in builds() {
                                div {
                                    key: "{build.id}",
                                    class: "card build-card",
                                    img { class: "card-image", src: "{build.image}", alt: "{build.title}" }
                                    div {
                                        class: "card-body",
                                        h3 { "{build.title}" }
                                        p { class: "caption", "by {build.builder}" }
                                        p { class: "specs", "{build.specs}" }
                                        div {
                                            class: "card-meta",
                                            span { "\u{2665} {build.likes}" }
                                            span { class: "caption", "{build.date}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "content-section alt",
                div {
                    class: "container",
                    h2 { "Learning Paths" }
                    p { class: "section-subtitle", "Master computer building with our structured courses" }
                    if paths().is_empty() {
                        p { class: "empty-state", "Courses are being prepared. Check back soon." }
                    } else {
                        div {
                            class: "card-grid",
                            for path in paths() {
                                div {
                                    key: "{path.id}",
                                    class: "card path-card",
                                    span { class: "badge", "{path.difficulty}" }
                                    h3 { "{path.title}" }
                                    p { "{path.description}" }
                                    div {
                                        class: "card-meta",
                                        span { "{path.duration}" }
                                        span { "{path.modules} modules" }
                                        span { "{path.enrolled} enrolled" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "content-section",
                div {
                    class: "container",
                    h2 { "Upcoming Events" }
                    if events().is_empty() {
                        p { class: "empty-state", "No upcoming events scheduled." }
                    } else {
                        div {
                            class: "event-list",
                            for event in events() {
                                div {
                                    key: "{event.id}",
                                    class: "card event-card",
                                    img { class: "event-image", src: "{event.image}", alt: "{event.title}" }
                                    div {
                                        class: "event-body",
                                        h3 { "{event.title}" }
                                        p { "{event.description}" }
                                        p { class: "caption", "{event.date} at {event.time} \u{00b7} {event.location}" }
                                        p { class: "caption", "{event.attendees}/{event.max_attendees} registered" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "content-section alt",
                div {
                    class: "container",
                    h2 { "Community Forum" }
                    if topics().is_empty() {
                        p { class: "empty-state", "No discussions yet. Start one from your dashboard." }
                    } else {
                        div {
                            class: "topic-list",
                            for topic in topics() {
                                div {
                                    key: "{topic.id}",
                                    class: "card topic-card",
                                    div {
                                        class: "topic-main",
                                        if topic.is_pinned {
                                            span { class: "badge pinned", "Pinned" }
                                        }
                                        h3 { "{topic.title}" }
                                        p { class: "caption", "{topic.author} \u{00b7} {topic.category}" }
                                    }
                                    div {
                                        class: "topic-stats",
                                        span { "{topic.replies} replies" }
                                        span { "{topic.views} views" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "cta-section",
                div {
                    class: "container",
                    h2 { "Ready to build your dream PC?" }
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            analytics::track_cta("Join the Community", "footer-cta");
                            nav.push("/dashboard");
                        },
                        "Join the Community"
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(value: &'static str, label: &'static str) -> Element {
    rsx! {
        div {
            class: "stat-card",
            h3 { "{value}" }
            p { "{label}" }
        }
    }
}
