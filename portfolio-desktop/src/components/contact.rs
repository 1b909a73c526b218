use dioxus::prelude::*;

use desktop_core::content::{ContactLink, AVAILABILITY_NOTE, CONTACT_LINKS};

#[component]
pub fn ContactView() -> Element {
    rsx! {
        div {
            style: "height: 100%; padding: 1.5rem; background: var(--bg-secondary);",

            h2 {
                style: "margin: 0 0 1.5rem; font-size: 1.25rem; font-weight: 700; color: var(--text-primary);",
                "Entre em Contato"
            }

            div {
                style: "display: flex; flex-direction: column; gap: 1.5rem;",
                for link in CONTACT_LINKS.iter() {
                    ContactLinkCard { key: "{link.label}", link: *link }
                }

                div {
                    style: "margin-top: 0.5rem; padding: 1rem; background: rgba(30, 58, 138, 0.3); border: 1px solid rgba(29, 78, 216, 0.5); border-radius: var(--radius-md);",
                    p {
                        style: "margin: 0; font-size: 0.875rem; text-align: center; color: #93c5fd;",
                        "{AVAILABILITY_NOTE}"
                    }
                }
            }
        }
    }
}

#[component]
fn ContactLinkCard(link: ContactLink) -> Element {
    rsx! {
        a {
            class: "contact-link",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "display: flex; align-items: center; gap: 1rem; padding: 1rem; background: var(--card-bg); border: 1px solid var(--border-color); border-radius: var(--radius-md); text-decoration: none; transition: background 0.2s;",

            div {
                style: "width: 3rem; height: 3rem; flex-shrink: 0; border-radius: 999px; background: {link.icon_bg}; display: flex; align-items: center; justify-content: center; font-size: 1.25rem; color: #ffffff;",
                "{link.icon}"
            }
            div {
                div { style: "font-weight: 500; color: var(--text-primary);", "{link.label}" }
                div { style: "color: var(--accent-text);", "{link.display}" }
            }
        }
    }
}
