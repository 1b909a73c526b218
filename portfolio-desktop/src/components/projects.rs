use dioxus::prelude::*;

use desktop_core::content::{Project, ProjectStatus, PROJECTS};

fn status_badge_style(status: ProjectStatus) -> String {
    let (background, text, border) = status.badge_colors();
    format!(
        "font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 999px; white-space: nowrap; \
         background: {background}; color: {text}; border: 1px solid {border};"
    )
}

#[component]
pub fn ProjectsView() -> Element {
    rsx! {
        div {
            style: "height: 100%; padding: 1.5rem; background: var(--bg-secondary); display: flex; flex-direction: column;",

            h2 {
                style: "margin: 0 0 1.5rem; flex-shrink: 0; font-size: 1.25rem; font-weight: 700; color: var(--text-primary);",
                "Projetos Destacados"
            }

            div {
                style: "flex: 1; overflow-y: auto; padding-right: 0.5rem; display: flex; flex-direction: column; gap: 1rem;",
                for project in PROJECTS.iter() {
                    ProjectCard { key: "{project.name}", project: *project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "content-card",
            style: "padding: 1rem; background: var(--card-bg); border: 1px solid var(--border-color); border-radius: var(--radius-md); transition: background 0.2s;",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 0.5rem; margin-bottom: 0.75rem;",
                h3 { style: "margin: 0; font-weight: 600; color: var(--text-primary);", "{project.name}" }
                span { style: "{status_badge_style(project.status)}", "{project.status.label()}" }
            }

            p {
                style: "margin: 0 0 0.75rem; font-size: 0.875rem; color: var(--text-secondary);",
                "{project.description}"
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 0.5rem;",
                for tech in project.tech.iter() {
                    span {
                        key: "{tech}",
                        style: "font-size: 0.75rem; padding: 0.25rem 0.5rem; background: #4b5563; color: #e5e7eb; border: 1px solid #6b7280; border-radius: var(--radius-sm);",
                        "{tech}"
                    }
                }
            }
        }
    }
}
