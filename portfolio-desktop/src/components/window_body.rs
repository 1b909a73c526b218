use dioxus::prelude::*;

use desktop_core::content::UNKNOWN_CONTENT_MESSAGE;
use desktop_core::WindowContent;

use crate::components::{AboutView, ContactView, ExperienceView, ProjectsView, SkillsView};

/// Panel for a window id; ids outside the catalog get a placeholder.
#[component]
pub fn WindowBody(app_id: String, typing_interval_ms: u32) -> Element {
    match WindowContent::resolve(&app_id) {
        WindowContent::About => rsx! { AboutView {} },
        WindowContent::Experience => rsx! { ExperienceView {} },
        WindowContent::Skills => rsx! { SkillsView { typing_interval_ms } },
        WindowContent::Projects => rsx! { ProjectsView {} },
        WindowContent::Contact => rsx! { ContactView {} },
        WindowContent::Unknown(id) => {
            dioxus_logger::tracing::warn!("No panel for window id {}", id);
            rsx! {
                div {
                    style: "height: 100%; padding: 1.5rem; background: var(--bg-secondary); color: var(--text-muted);",
                    "{UNKNOWN_CONTENT_MESSAGE}"
                }
            }
        }
    }
}
