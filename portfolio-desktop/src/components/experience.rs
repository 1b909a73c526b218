use dioxus::prelude::*;

use desktop_core::content::{Experience, EXPERIENCES};

#[component]
pub fn ExperienceView() -> Element {
    rsx! {
        div {
            style: "height: 100%; padding: 1.5rem; background: var(--bg-secondary);",

            h2 {
                style: "margin: 0 0 1.5rem; font-size: 1.25rem; font-weight: 700; color: var(--text-primary);",
                "Experiência Profissional"
            }

            div {
                style: "display: flex; flex-direction: column; gap: 1rem;",
                for entry in EXPERIENCES.iter() {
                    ExperienceCard { key: "{entry.company}", entry: *entry }
                }
            }
        }
    }
}

#[component]
fn ExperienceCard(entry: Experience) -> Element {
    rsx! {
        div {
            class: "content-card",
            style: "display: flex; align-items: flex-start; gap: 1rem; padding: 1rem; background: var(--card-bg); border: 1px solid var(--border-color); border-radius: var(--radius-md); transition: background 0.2s;",

            div { style: "font-size: 1.5rem;", "{entry.icon}" }

            div {
                style: "flex: 1;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 0.5rem;",
                    h3 { style: "margin: 0; font-weight: 600; color: var(--text-primary);", "{entry.company}" }
                    span {
                        style: "font-size: 0.875rem; color: var(--text-secondary); background: #4b5563; padding: 0.25rem 0.5rem; border-radius: var(--radius-sm);",
                        "{entry.period}"
                    }
                }
                p { style: "margin: 0 0 0.5rem; font-weight: 500; color: var(--accent-text);", "{entry.role}" }
                p { style: "margin: 0; font-size: 0.875rem; color: var(--text-secondary);", "{entry.description}" }
            }
        }
    }
}
