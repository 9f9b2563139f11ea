//! Site footer.

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "container footer-row",
                div {
                    class: "footer-brand",
                    h3 { "LinkAndLearnLabs" }
                    p { "An inclusive community for PC building, gaming rigs, and tech education." }
                }
                div {
                    class: "footer-links",
                    h4 { "Community" }
                    a { href: "/dashboard", "Dashboard" }
                    a { href: "/resources", "Resources & Tools" }
                }
                div {
                    class: "footer-note",
                    p { "Some outbound links are affiliate links that support the community." }
                }
            }
            div {
                class: "container footer-copy",
                p { "\u{00a9} 2025 LinkAndLearnLabs. Build. Learn. Connect." }
            }
        }
    }
}
