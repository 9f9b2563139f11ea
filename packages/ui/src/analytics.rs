//! Google Analytics 4 bridge.
//!
//! A thin, fire-and-forget wrapper over `window.gtag`. [`init`] injects the GA
//! loader and configures manual page views (single-page app, so automatic page
//! views would miss route changes); everything else funnels through
//! [`track_event`]. A missing measurement id disables tracking with one warning.
//! All of it is a no-op outside the browser.

use serde_json::{json, Value};

/// Load the GA script and configure the measurement id. Call once at app start.
pub fn init(measurement_id: Option<&str>) {
    let Some(id) = measurement_id.filter(|id| !id.is_empty()) else {
        tracing::warn!("analytics measurement id not configured, tracking disabled");
        return;
    };

    eval_js(&format!(
        r#"(function() {{
            var s = document.createElement('script');
            s.async = true;
            s.src = 'https://www.googletagmanager.com/gtag/js?id={id}';
            document.head.appendChild(s);
            window.dataLayer = window.dataLayer || [];
            window.gtag = function() {{ window.dataLayer.push(arguments); }};
            window.gtag('js', new Date());
            window.gtag('config', '{id}', {{ send_page_view: false }});
        }})();"#
    ));
}

/// Forward a custom event to gtag. Silently does nothing when gtag is absent
/// (init skipped or blocked).
pub fn track_event(name: &str, params: Value) {
    eval_js(&format!(
        "window.gtag && window.gtag('event', '{name}', {params});"
    ));
}

fn eval_js(js: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = dioxus::document::eval(js);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = js;
    }
}

// Predefined event trackers.

pub fn track_page_view(path: &str, title: &str) {
    track_event("page_view", json!({ "page_path": path, "page_title": title }));
}

pub fn track_sign_in() {
    track_event("login", json!({ "method": "OAuth broker" }));
}

pub fn track_sign_out() {
    track_event("logout", json!({}));
}

pub fn track_affiliate_click(tool_name: &str, tool_id: &str, price: f64) {
    track_event(
        "affiliate_click",
        json!({
            "tool_name": tool_name,
            "tool_id": tool_id,
            "value": price,
            "currency": "USD",
        }),
    );
}

pub fn track_video_click(video_title: &str, video_id: &str, platform: &str) {
    track_event(
        "video_click",
        json!({
            "video_title": video_title,
            "video_id": video_id,
            "platform": platform,
        }),
    );
}

pub fn track_learning_path_enroll(path_title: &str, path_id: &str) {
    track_event(
        "enroll_learning_path",
        json!({ "path_title": path_title, "path_id": path_id }),
    );
}

pub fn track_event_registration(event_title: &str, event_id: &str, event_date: &str) {
    track_event(
        "event_registration",
        json!({
            "event_title": event_title,
            "event_id": event_id,
            "event_date": event_date,
        }),
    );
}

pub fn track_build_like(build_title: &str, build_id: &str) {
    track_event(
        "like_build",
        json!({ "build_title": build_title, "build_id": build_id }),
    );
}

pub fn track_build_create(build_title: &str) {
    track_event("create_build", json!({ "build_title": build_title }));
}

pub fn track_forum_topic_create(topic_title: &str, category: &str) {
    track_event(
        "create_forum_topic",
        json!({ "topic_title": topic_title, "category": category }),
    );
}

pub fn track_cta(cta_name: &str, location: &str) {
    track_event(
        "cta_click",
        json!({ "cta_name": cta_name, "location": location }),
    );
}

pub fn track_admin_action(action: &str, item_type: &str) {
    track_event(
        "admin_action",
        json!({ "action": action, "item_type": item_type }),
    );
}
