use dioxus::prelude::*;

use desktop_core::content::PROFILE;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            style: "height: 100%; padding: 1.5rem; background: var(--bg-secondary); display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; gap: 1.5rem;",

            div {
                style: "width: 8rem; height: 8rem; border-radius: 999px; background: linear-gradient(135deg, #2563eb, #7c3aed); display: flex; align-items: center; justify-content: center; font-size: 2.25rem; font-weight: 700; color: #ffffff; box-shadow: var(--shadow-lg);",
                "{PROFILE.initials}"
            }

            div {
                h1 {
                    style: "margin: 0 0 0.5rem; font-size: 1.5rem; font-weight: 700; color: var(--text-primary);",
                    "{PROFILE.name}"
                }
                p {
                    style: "margin: 0 0 1rem; font-size: 1.125rem; color: var(--accent-text);",
                    "{PROFILE.role}"
                }
                p {
                    style: "margin: 0 auto; max-width: 28rem; line-height: 1.6; color: var(--text-secondary);",
                    "{PROFILE.bio}"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; font-size: 0.875rem; color: var(--text-muted);",
                for stat in PROFILE.stats.iter() {
                    div {
                        key: "{stat.label}",
                        div { style: "font-weight: 600; color: var(--text-primary);", "{stat.value}" }
                        div { "{stat.label}" }
                    }
                }
            }
        }
    }
}
