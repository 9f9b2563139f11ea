//! Signed-in member dashboard: personal stats plus tabs for learning paths,
//! community builds, events, and the forum. Anonymous visitors are bounced
//! straight to the login broker.

use dioxus::prelude::*;

use api::{
    BuildDraft, BuildInfo, EventInfo, ForumTopicDraft, ForumTopicInfo, LearningPathInfo, UserInfo,
};
use ui::{analytics, push_toast, use_auth, use_toasts, ToastLevel};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| "overview");

    use_effect(|| analytics::track_page_view("/dashboard", "Dashboard"));

    // Anonymous visitors go to the broker once the session check settles.
    use_effect(move || {
        if auth().is_anonymous() {
            spawn(async {
                ui::redirect_to_login().await;
            });
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page-loading", p { "Loading your dashboard..." } }
        };
    }
    let Some(user) = state.user else {
        return rsx! {
            div { class: "page-loading", p { "Redirecting to sign in..." } }
        };
    };

    rsx! {
        div {
            class: "dashboard-page container",

            header {
                class: "dashboard-header",
                if let Some(avatar) = user.avatar_url.clone() {
                    img { class: "avatar-lg", src: "{avatar}", alt: "{user.display_name()}" }
                }
                div {
                    h1 { "Welcome back, {user.display_name()}!" }
                    p { class: "caption", "{user.community_rank} \u{00b7} member since {user.joined}" }
                }
            }

            div {
                class: "stats-grid",
                div { class: "stat-card", h3 { "{user.builds_shared}" } p { "Builds Shared" } }
                div { class: "stat-card", h3 { "{user.courses_completed}" } p { "Courses Completed" } }
                div { class: "stat-card", h3 { "{user.community_rank}" } p { "Community Rank" } }
            }

            nav {
                class: "tab-bar",
                for (id, label) in [
                    ("overview", "Overview"),
                    ("learning", "Learning"),
                    ("builds", "Builds"),
                    ("events", "Events"),
                    ("forum", "Forum"),
                ] {
                    button {
                        class: if tab() == id { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(id),
                        "{label}"
                    }
                }
            }

            match tab() {
                "learning" => rsx! { LearningTab {} },
                "builds" => rsx! { BuildsTab {} },
                "events" => rsx! { EventsTab {} },
                "forum" => rsx! { ForumTab {} },
                _ => rsx! { OverviewTab { user: user.clone() } },
            }
        }
    }
}

#[component]
fn OverviewTab(user: UserInfo) -> Element {
    rsx! {
        div {
            class: "tab-panel",
            h2 { "Your Activity" }
            p {
                "You have shared {user.builds_shared} builds and completed "
                "{user.courses_completed} courses. Keep it up!"
            }
            p { class: "caption", "Pick a tab above to enroll in a course, browse builds, or join an event." }
        }
    }
}

#[component]
fn LearningTab() -> Element {
    let mut paths = use_signal(Vec::<LearningPathInfo>::new);
    let mut toasts = use_toasts();

    let _loader = use_resource(move || async move {
        match api::list_learning_paths().await {
            Ok(list) => paths.set(list),
            Err(e) => tracing::error!("failed to load learning paths: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            h2 { "Learning Paths" }
            if paths().is_empty() {
                p { class: "empty-state", "No courses available yet." }
            }
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
                        button {
                            class: "btn-primary",
                            onclick: {
                                let path_id = path.id.clone();
                                let title = path.title.clone();
                                move |_| {
                                    let path_id = path_id.clone();
                                    let title = title.clone();
                                    async move {
                                        match api::enroll_learning_path(path_id).await {
                                            Ok(updated) => {
                                                analytics::track_learning_path_enroll(&updated.title, &updated.id);
                                                let mut list = paths();
                                                if let Some(slot) = list.iter_mut().find(|p| p.id == updated.id) {
                                                    *slot = updated;
                                                }
                                                paths.set(list);
                                                push_toast(
                                                    &mut toasts,
                                                    ToastLevel::Success,
                                                    "Enrolled",
                                                    &format!("You are enrolled in {title}"),
                                                );
                                            }
                                            Err(e) => push_toast(
                                                &mut toasts,
                                                ToastLevel::Error,
                                                "Enrollment failed",
                                                &e.to_string(),
                                            ),
                                        }
                                    }
                                }
                            },
                            "Enroll"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BuildsTab() -> Element {
    let mut builds = use_signal(Vec::<BuildInfo>::new);
    let mut show_form = use_signal(|| false);
    let mut toasts = use_toasts();

    let _loader = use_resource(move || async move {
        match api::list_builds(20, 0).await {
            Ok(list) => builds.set(list),
            Err(e) => tracing::error!("failed to load builds: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            div {
                class: "panel-header",
                h2 { "Community Builds" }
                button {
                    class: "btn-primary",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "Share a Build" }
                }
            }
            if show_form() {
                BuildForm {
                    on_created: move |build: BuildInfo| {
                        analytics::track_build_create(&build.title);
                        let mut list = builds();
                        list.insert(0, build);
                        builds.set(list);
                        show_form.set(false);
                        push_toast(&mut toasts, ToastLevel::Success, "Build shared", "Your build is live");
                    },
                }
            }
            if builds().is_empty() {
                p { class: "empty-state", "No builds shared yet. Be the first!" }
            }
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
                            button {
                                class: "btn-like",
                                onclick: {
                                    let build_id = build.id.clone();
                                    let title = build.title.clone();
                                    move |_| {
                                        let build_id = build_id.clone();
                                        let title = title.clone();
                                        async move {
                                            match api::like_build(build_id).await {
                                                Ok(updated) => {
                                                    analytics::track_build_like(&title, &updated.id);
                                                    let mut list = builds();
                                                    if let Some(slot) = list.iter_mut().find(|b| b.id == updated.id) {
                                                        *slot = updated;
                                                    }
                                                    builds.set(list);
                                                }
                                                Err(e) => push_toast(
                                                    &mut toasts,
                                                    ToastLevel::Error,
                                                    "Like failed",
                                                    &e.to_string(),
                                                ),
                                            }
                                        }
                                    }
                                },
                                "\u{2665} {build.likes}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BuildForm(on_created: EventHandler<BuildInfo>) -> Element {
    let mut title = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut specs = use_signal(String::new);
    let mut toasts = use_toasts();

    rsx! {
        form {
            class: "inline-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let draft = BuildDraft {
                    title: title().trim().to_string(),
                    image: image().trim().to_string(),
                    specs: specs().trim().to_string(),
                };
                if draft.title.is_empty() || draft.specs.is_empty() {
                    push_toast(&mut toasts, ToastLevel::Error, "Missing fields", "Title and specs are required");
                    return;
                }
                spawn(async move {
                    match api::create_build(draft).await {
                        Ok(build) => on_created.call(build),
                        Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Share failed", &e.to_string()),
                    }
                });
            },
            input {
                placeholder: "Build title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            input {
                placeholder: "Image URL",
                value: "{image}",
                oninput: move |evt| image.set(evt.value()),
            }
            input {
                placeholder: "Specs (CPU, GPU, RAM...)",
                value: "{specs}",
                oninput: move |evt| specs.set(evt.value()),
            }
            button { class: "btn-primary", r#type: "submit", "Share" }
        }
    }
}

#[component]
fn EventsTab() -> Element {
    let mut events = use_signal(Vec::<EventInfo>::new);
    let mut toasts = use_toasts();

    let _loader = use_resource(move || async move {
        match api::list_events().await {
            Ok(list) => events.set(list),
            Err(e) => tracing::error!("failed to load events: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            h2 { "Upcoming Events" }
            if events().is_empty() {
                p { class: "empty-state", "No upcoming events scheduled." }
            }
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
                            button {
                                class: "btn-primary",
                                disabled: event.is_full(),
                                onclick: {
                                    let event_id = event.id.clone();
                                    let title = event.title.clone();
                                    move |_| {
                                        let event_id = event_id.clone();
                                        let title = title.clone();
                                        async move {
                                            match api::register_event(event_id).await {
                                                Ok(updated) => {
                                                    analytics::track_event_registration(
                                                        &title,
                                                        &updated.id,
                                                        &updated.date,
                                                    );
                                                    let mut list = events();
                                                    if let Some(slot) = list.iter_mut().find(|e| e.id == updated.id) {
                                                        *slot = updated;
                                                    }
                                                    events.set(list);
                                                    push_toast(
                                                        &mut toasts,
                                                        ToastLevel::Success,
                                                        "Registered",
                                                        &format!("See you at {title}"),
                                                    );
                                                }
                                                Err(e) => push_toast(
                                                    &mut toasts,
                                                    ToastLevel::Error,
                                                    "Registration failed",
                                                    &e.to_string(),
                                                ),
                                            }
                                        }
                                    }
                                },
                                if event.is_full() { "Event Full" } else { "Register" }
                            }
                        }
                    }
                }
            }
        }
    }
}

const FORUM_CATEGORIES: [&str; 5] =
    ["General", "Build Help", "Troubleshooting", "Showcase", "Deals"];

#[component]
fn ForumTab() -> Element {
    let mut category = use_signal(|| None::<String>);
    let mut topics = use_signal(Vec::<ForumTopicInfo>::new);
    let mut show_form = use_signal(|| false);
    let mut toasts = use_toasts();

    let _loader = use_resource(move || async move {
        match api::list_forum_topics(category(), 20, 0).await {
            Ok(list) => topics.set(list),
            Err(e) => tracing::error!("failed to load forum topics: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            div {
                class: "panel-header",
                h2 { "Community Forum" }
                button {
                    class: "btn-primary",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "New Topic" }
                }
            }
            div {
                class: "filter-bar",
                button {
                    class: if category().is_none() { "chip active" } else { "chip" },
                    onclick: move |_| category.set(None),
                    "All"
                }
                for name in FORUM_CATEGORIES {
                    button {
                        class: if category().as_deref() == Some(name) { "chip active" } else { "chip" },
                        onclick: move |_| category.set(Some(name.to_string())),
                        "{name}"
                    }
                }
            }
            if show_form() {
                TopicForm {
                    on_created: move |topic: ForumTopicInfo| {
                        analytics::track_forum_topic_create(&topic.title, &topic.category);
                        let mut list = topics();
                        list.insert(0, topic);
                        topics.set(list);
                        show_form.set(false);
                        push_toast(&mut toasts, ToastLevel::Success, "Topic posted", "Your topic is live");
                    },
                }
            }
            if topics().is_empty() {
                p { class: "empty-state", "No discussions in this category yet." }
            }
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

#[component]
fn TopicForm(on_created: EventHandler<ForumTopicInfo>) -> Element {
    let mut title = use_signal(String::new);
    let mut category = use_signal(|| FORUM_CATEGORIES[0].to_string());
    let mut content = use_signal(String::new);
    let mut toasts = use_toasts();

    rsx! {
        form {
            class: "inline-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let draft = ForumTopicDraft {
                    title: title().trim().to_string(),
                    category: category(),
                    content: content().trim().to_string(),
                };
                if draft.title.is_empty() || draft.content.is_empty() {
                    push_toast(&mut toasts, ToastLevel::Error, "Missing fields", "Title and content are required");
                    return;
                }
                spawn(async move {
                    match api::create_forum_topic(draft).await {
                        Ok(topic) => on_created.call(topic),
                        Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Post failed", &e.to_string()),
                    }
                });
            },
            input {
                placeholder: "Topic title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            select {
                value: "{category}",
                onchange: move |evt| category.set(evt.value()),
                for name in FORUM_CATEGORIES {
                    option { value: "{name}", "{name}" }
                }
            }
            textarea {
                placeholder: "What do you want to discuss?",
                value: "{content}",
                oninput: move |evt| content.set(evt.value()),
            }
            button { class: "btn-primary", r#type: "submit", "Post Topic" }
        }
    }
}
