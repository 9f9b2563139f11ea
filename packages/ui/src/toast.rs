//! Transient toast notifications for operation outcomes.
//!
//! Admin CRUD results (and any other page-level outcome worth surfacing) go
//! through a context-provided signal. [`ToastProvider`] owns the signal and
//! renders the stacked overlay; pages call [`push_toast`] with the operation
//! name in the message so a failure always says what failed.

use dioxus::prelude::*;

/// Oldest entries drop past this point; a burst of failures should not bury
/// the page under an unbounded stack.
const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    pub entries: Vec<Toast>,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, message: &str) {
    push_capped(
        &mut toasts.write().entries,
        Toast {
            level,
            title: title.to_string(),
            message: message.to_string(),
        },
    );
}

fn push_capped(entries: &mut Vec<Toast>, toast: Toast) {
    entries.push(toast);
    while entries.len() > MAX_TOASTS {
        entries.remove(0);
    }
}

/// Provides the toast signal to descendants and renders the overlay stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for (index, toast) in toasts().entries.iter().enumerate() {
                div {
                    key: "{index}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    div {
                        class: "toast-body",
                        strong { "{toast.title}" }
                        p { "{toast.message}" }
                    }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| {
                            let entries = &mut toasts.write().entries;
                            if index < entries.len() {
                                entries.remove(index);
                            }
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(message: &str) -> Toast {
        Toast {
            level: ToastLevel::Success,
            title: "Success".into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut entries = Vec::new();
        push_capped(&mut entries, toast("first"));
        push_capped(&mut entries, toast("second"));
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn test_push_drops_oldest_past_cap() {
        let mut entries = Vec::new();
        for i in 0..MAX_TOASTS + 2 {
            push_capped(&mut entries, toast(&format!("t{i}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries[0].message, "t2");
        assert_eq!(entries.last().unwrap().message, format!("t{}", MAX_TOASTS + 1));
    }
}
