//! Site header with navigation and auth controls.

use dioxus::prelude::*;

use crate::auth::{use_auth, SignInButton, SignOutButton};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/dashboard", "Dashboard"),
    ("/resources", "Resources"),
];

#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        header {
            class: "site-header",
            div {
                class: "container header-row",
                div {
                    class: "logo",
                    onclick: move |_| { nav.push("/"); },
                    h1 { "LinkAndLearnLabs" }
                }

                nav {
                    class: "desktop-nav",
                    for (path, label) in NAV_LINKS.iter() {
                        a {
                            key: "{path}",
                            class: "nav-link",
                            onclick: {
                                let path = path.to_string();
                                move |_| { nav.push(path.as_str()); }
                            },
                            "{label}"
                        }
                    }
                    if auth().is_authenticated() {
                        a {
                            class: "nav-link",
                            onclick: move |_| { nav.push("/admin"); },
                            "Admin"
                        }
                    }

                    if let Some(user) = auth().user {
                        div {
                            class: "header-user",
                            if let Some(ref avatar) = user.avatar_url {
                                img { class: "header-avatar", src: "{avatar}", alt: "{user.display_name()}" }
                            }
                            span { class: "header-name", "{user.display_name()}" }
                            SignOutButton {}
                        }
                    } else if !auth().loading {
                        SignInButton {}
                    }
                }
            }
        }
    }
}
