//! Admin panel for curating the resources directory. Every signed-in member
//! can reach it; anonymous visitors are sent back to the home page.

use dioxus::prelude::*;

use api::{AffiliateToolDraft, AffiliateToolInfo, VideoDraft, VideoInfo};
use ui::{analytics, push_toast, use_auth, use_toasts, ToastLevel};

/// What a form submit does with its draft: exactly one create for a new entry,
/// exactly one update for an existing id.
#[derive(Debug, Clone, PartialEq)]
enum SaveAction {
    Create,
    Update(String),
}

fn plan_save(existing_id: Option<String>) -> SaveAction {
    match existing_id {
        Some(id) => SaveAction::Update(id),
        None => SaveAction::Create,
    }
}

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut tab = use_signal(|| "tools");

    use_effect(|| analytics::track_page_view("/admin", "Admin"));

    // Anonymous visitors go back home once the session check settles.
    use_effect(move || {
        if auth().is_anonymous() {
            nav.push("/");
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            div { class: "page-loading", p { "Loading..." } }
        };
    }
    if !state.is_authenticated() {
        return rsx! {
            div { class: "page-loading", p { "Redirecting..." } }
        };
    }

    rsx! {
        div {
            class: "admin-page container",
            header {
                class: "page-header",
                h1 { "Admin Panel" }
                p { "Manage affiliate tools and the video library" }
            }

            nav {
                class: "tab-bar",
                for (id, label) in [("tools", "Tools"), ("videos", "Videos"), ("stats", "Stats")] {
                    button {
                        class: if tab() == id { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(id),
                        "{label}"
                    }
                }
            }

            match tab() {
                "videos" => rsx! { VideosAdmin {} },
                "stats" => rsx! { StatsAdmin {} },
                _ => rsx! { ToolsAdmin {} },
            }
        }
    }
}

#[component]
fn ToolsAdmin() -> Element {
    let mut tools = use_signal(Vec::<AffiliateToolInfo>::new);
    let mut editing = use_signal(|| None::<AffiliateToolInfo>);
    let mut show_form = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let mut toasts = use_toasts();

    let _loader = use_resource(move || async move {
        let _tick = reload();
        match api::list_affiliate_tools().await {
            Ok(list) => tools.set(list),
            Err(e) => tracing::error!("failed to load affiliate tools: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            div {
                class: "panel-header",
                h2 { "Affiliate Tools" }
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "Add Tool"
                }
            }

            if show_form() {
                ToolForm {
                    existing: editing(),
                    on_save: move |draft: AffiliateToolDraft| {
                        let action = plan_save(editing().map(|t| t.id));
                        async move {
                            let result = match &action {
                                SaveAction::Update(id) => {
                                    api::update_affiliate_tool(id.clone(), draft).await.map(|_| "Tool updated")
                                }
                                SaveAction::Create => {
                                    api::create_affiliate_tool(draft).await.map(|_| "Tool created")
                                }
                            };
                            match result {
                                Ok(msg) => {
                                    analytics::track_admin_action(
                                        if matches!(action, SaveAction::Update(_)) { "update" } else { "create" },
                                        "affiliate_tool",
                                    );
                                    push_toast(&mut toasts, ToastLevel::Success, msg, "");
                                    show_form.set(false);
                                    editing.set(None);
                                    reload += 1;
                                }
                                Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Save failed", &e.to_string()),
                            }
                        }
                    },
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }

            if tools().is_empty() {
                p { class: "empty-state", "No tools yet. Add the first one." }
            }
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Category" }
                        th { "Price" }
                        th { "Rating" }
                        th { "Featured" }
                        th { "" }
                    }
                }
                tbody {
                    for tool in tools() {
                        tr {
                            key: "{tool.id}",
                            td { "{tool.name}" }
                            td { "{tool.category}" }
                            td { "${tool.price:.2}" }
                            td { "{tool.rating:.1}" }
                            td { if tool.featured { "Yes" } else { "No" } }
                            td {
                                class: "row-actions",
                                button {
                                    class: "btn-small",
                                    onclick: {
                                        let tool = tool.clone();
                                        move |_| {
                                            editing.set(Some(tool.clone()));
                                            show_form.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn-small danger",
                                    onclick: {
                                        let id = tool.id.clone();
                                        let name = tool.name.clone();
                                        move |_| {
                                            let id = id.clone();
                                            let name = name.clone();
                                            async move {
                                                if !ui::confirm(&format!("Delete {name}?")) {
                                                    return;
                                                }
                                                match api::delete_affiliate_tool(id).await {
                                                    Ok(()) => {
                                                        analytics::track_admin_action("delete", "affiliate_tool");
                                                        push_toast(&mut toasts, ToastLevel::Success, "Tool deleted", "");
                                                        reload += 1;
                                                    }
                                                    Err(e) => push_toast(
                                                        &mut toasts,
                                                        ToastLevel::Error,
                                                        "Delete failed",
                                                        &e.to_string(),
                                                    ),
                                                }
                                            }
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ToolForm(
    existing: Option<AffiliateToolInfo>,
    on_save: EventHandler<AffiliateToolDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let seed = existing.as_ref().map(|t| t.to_draft()).unwrap_or_default();
    let mut name = use_signal(|| seed.name.clone());
    let mut description = use_signal(|| seed.description.clone());
    let mut category = use_signal(|| seed.category.clone());
    let mut price = use_signal(|| if existing.is_some() { format!("{:.2}", seed.price) } else { String::new() });
    let mut rating = use_signal(|| if existing.is_some() { format!("{:.1}", seed.rating) } else { String::new() });
    let mut image = use_signal(|| seed.image.clone());
    let mut affiliate_link = use_signal(|| seed.affiliate_link.clone());
    let mut featured = use_signal(|| seed.featured);
    let mut toasts = use_toasts();

    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let Ok(price) = price().trim().parse::<f64>() else {
                    push_toast(&mut toasts, ToastLevel::Error, "Invalid price", "Enter a number like 59.99");
                    return;
                };
                let Ok(rating) = rating().trim().parse::<f64>() else {
                    push_toast(&mut toasts, ToastLevel::Error, "Invalid rating", "Enter a number between 0 and 5");
                    return;
                };
                let draft = AffiliateToolDraft {
                    name: name().trim().to_string(),
                    description: description().trim().to_string(),
                    category: category().trim().to_string(),
                    price,
                    rating,
                    image: image().trim().to_string(),
                    affiliate_link: affiliate_link().trim().to_string(),
                    featured: featured(),
                };
                if let Err(msg) = draft.validate() {
                    push_toast(&mut toasts, ToastLevel::Error, "Invalid tool", &msg);
                    return;
                }
                on_save.call(draft);
            },
            h3 { if existing.is_some() { "Edit Tool" } else { "New Tool" } }
            input {
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                placeholder: "Category",
                value: "{category}",
                oninput: move |evt| category.set(evt.value()),
            }
            textarea {
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            div {
                class: "form-row",
                input {
                    placeholder: "Price (USD)",
                    value: "{price}",
                    oninput: move |evt| price.set(evt.value()),
                }
                input {
                    placeholder: "Rating (0-5)",
                    value: "{rating}",
                    oninput: move |evt| rating.set(evt.value()),
                }
            }
            input {
                placeholder: "Image URL",
                value: "{image}",
                oninput: move |evt| image.set(evt.value()),
            }
            input {
                placeholder: "Affiliate link",
                value: "{affiliate_link}",
                oninput: move |evt| affiliate_link.set(evt.value()),
            }
            label {
                class: "checkbox-row",
                input {
                    r#type: "checkbox",
                    checked: featured(),
                    onchange: move |evt| featured.set(evt.checked()),
                }
                "Featured"
            }
            div {
                class: "form-actions",
                button { class: "btn-primary", r#type: "submit", "Save" }
                button {
                    class: "btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn VideosAdmin() -> Element {
    let mut videos = use_signal(Vec::<VideoInfo>::new);
    let mut editing = use_signal(|| None::<VideoInfo>);
    let mut show_form = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let mut toasts = use_toasts();

    let _loader = use_resource(move || async move {
        let _tick = reload();
        match api::list_videos().await {
            Ok(list) => videos.set(list),
            Err(e) => tracing::error!("failed to load videos: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            div {
                class: "panel-header",
                h2 { "Video Library" }
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "Add Video"
                }
            }

            if show_form() {
                VideoForm {
                    existing: editing(),
                    on_save: move |draft: VideoDraft| {
                        let action = plan_save(editing().map(|v| v.id));
                        async move {
                            let result = match &action {
                                SaveAction::Update(id) => {
                                    api::update_video(id.clone(), draft).await.map(|_| "Video updated")
                                }
                                SaveAction::Create => {
                                    api::create_video(draft).await.map(|_| "Video created")
                                }
                            };
                            match result {
                                Ok(msg) => {
                                    analytics::track_admin_action(
                                        if matches!(action, SaveAction::Update(_)) { "update" } else { "create" },
                                        "video",
                                    );
                                    push_toast(&mut toasts, ToastLevel::Success, msg, "");
                                    show_form.set(false);
                                    editing.set(None);
                                    reload += 1;
                                }
                                Err(e) => push_toast(&mut toasts, ToastLevel::Error, "Save failed", &e.to_string()),
                            }
                        }
                    },
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                }
            }

            if videos().is_empty() {
                p { class: "empty-state", "No videos yet. Add the first one." }
            }
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Duration" }
                        th { "Views" }
                        th { "Platforms" }
                        th { "" }
                    }
                }
                tbody {
                    for video in videos() {
                        tr {
                            key: "{video.id}",
                            td { "{video.title}" }
                            td { "{video.duration}" }
                            td { "{video.views}" }
                            td { {video.platforms.join(", ")} }
                            td {
                                class: "row-actions",
                                button {
                                    class: "btn-small",
                                    onclick: {
                                        let video = video.clone();
                                        move |_| {
                                            editing.set(Some(video.clone()));
                                            show_form.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn-small danger",
                                    onclick: {
                                        let id = video.id.clone();
                                        let title = video.title.clone();
                                        move |_| {
                                            let id = id.clone();
                                            let title = title.clone();
                                            async move {
                                                if !ui::confirm(&format!("Delete {title}?")) {
                                                    return;
                                                }
                                                match api::delete_video(id).await {
                                                    Ok(()) => {
                                                        analytics::track_admin_action("delete", "video");
                                                        push_toast(&mut toasts, ToastLevel::Success, "Video deleted", "");
                                                        reload += 1;
                                                    }
                                                    Err(e) => push_toast(
                                                        &mut toasts,
                                                        ToastLevel::Error,
                                                        "Delete failed",
                                                        &e.to_string(),
                                                    ),
                                                }
                                            }
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VideoForm(
    existing: Option<VideoInfo>,
    on_save: EventHandler<VideoDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let seed = existing.as_ref().map(|v| v.to_draft()).unwrap_or_default();
    let mut title = use_signal(|| seed.title.clone());
    let mut description = use_signal(|| seed.description.clone());
    let mut thumbnail = use_signal(|| seed.thumbnail.clone());
    let mut video_url = use_signal(|| seed.video_url.clone());
    let mut duration = use_signal(|| seed.duration.clone());
    let mut views = use_signal(|| seed.views.clone());
    let mut platforms = use_signal(|| seed.platforms.clone());
    let mut platform_input = use_signal(String::new);
    let mut toasts = use_toasts();

    rsx! {
        form {
            class: "admin-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let draft = VideoDraft {
                    title: title().trim().to_string(),
                    description: description().trim().to_string(),
                    thumbnail: thumbnail().trim().to_string(),
                    video_url: video_url().trim().to_string(),
                    duration: duration().trim().to_string(),
                    views: views().trim().to_string(),
                    platforms: platforms(),
                };
                if let Err(msg) = draft.validate() {
                    push_toast(&mut toasts, ToastLevel::Error, "Invalid video", &msg);
                    return;
                }
                on_save.call(draft);
            },
            h3 { if existing.is_some() { "Edit Video" } else { "New Video" } }
            input {
                placeholder: "Title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            input {
                placeholder: "Thumbnail URL",
                value: "{thumbnail}",
                oninput: move |evt| thumbnail.set(evt.value()),
            }
            input {
                placeholder: "Video URL",
                value: "{video_url}",
                oninput: move |evt| video_url.set(evt.value()),
            }
            div {
                class: "form-row",
                input {
                    placeholder: "Duration (e.g. 12:34)",
                    value: "{duration}",
                    oninput: move |evt| duration.set(evt.value()),
                }
                input {
                    placeholder: "Views label (e.g. 1.2K)",
                    value: "{views}",
                    oninput: move |evt| views.set(evt.value()),
                }
            }
            div {
                class: "platform-editor",
                div {
                    class: "form-row",
                    input {
                        placeholder: "Platform (e.g. YouTube)",
                        value: "{platform_input}",
                        oninput: move |evt| platform_input.set(evt.value()),
                    }
                    button {
                        class: "btn-small",
                        r#type: "button",
                        onclick: move |_| {
                            let name = platform_input().trim().to_string();
                            if name.is_empty() {
                                return;
                            }
                            let mut list = platforms();
                            if list.iter().any(|p| p.eq_ignore_ascii_case(&name)) {
                                push_toast(&mut toasts, ToastLevel::Error, "Duplicate platform", &name);
                                return;
                            }
                            list.push(name);
                            platforms.set(list);
                            platform_input.set(String::new());
                        },
                        "Add"
                    }
                }
                div {
                    class: "platform-badges",
                    for (i, platform) in platforms().into_iter().enumerate() {
                        span {
                            key: "{platform}",
                            class: "badge platform",
                            "{platform} "
                            button {
                                r#type: "button",
                                onclick: move |_| {
                                    let mut list = platforms();
                                    list.remove(i);
                                    platforms.set(list);
                                },
                                "\u{00d7}"
                            }
                        }
                    }
                }
            }
            div {
                class: "form-actions",
                button { class: "btn-primary", r#type: "submit", "Save" }
                button {
                    class: "btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn StatsAdmin() -> Element {
    let mut tool_count = use_signal(|| 0usize);
    let mut featured_count = use_signal(|| 0usize);
    let mut video_count = use_signal(|| 0usize);

    let _loader = use_resource(move || async move {
        match api::list_affiliate_tools().await {
            Ok(tools) => {
                featured_count.set(tools.iter().filter(|t| t.featured).count());
                tool_count.set(tools.len());
            }
            Err(e) => tracing::error!("failed to load affiliate tools: {e}"),
        }
        match api::list_videos().await {
            Ok(videos) => video_count.set(videos.len()),
            Err(e) => tracing::error!("failed to load videos: {e}"),
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            h2 { "Catalog Stats" }
            div {
                class: "stats-grid",
                div { class: "stat-card", h3 { "{tool_count}" } p { "Affiliate Tools" } }
                div { class: "stat-card", h3 { "{featured_count}" } p { "Featured Tools" } }
                div { class: "stat-card", h3 { "{video_count}" } p { "Videos" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_plan_updates_when_editing() {
        assert_eq!(
            plan_save(Some("tool-1".into())),
            SaveAction::Update("tool-1".into())
        );
    }

    #[test]
    fn test_save_plan_creates_without_id() {
        assert_eq!(plan_save(None), SaveAction::Create);
    }
}
