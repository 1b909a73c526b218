use dioxus::prelude::*;
use desktop_core::{AppDefinition, AppId, DOCK_Z_INDEX};

#[component]
pub fn Dock(apps: Vec<AppDefinition>, on_open_app: Callback<AppId>) -> Element {
    rsx! {
        div {
            class: "dock",
            style: "position: absolute; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: {DOCK_Z_INDEX};",

            div {
                style: "display: flex; align-items: center; gap: 0.25rem; padding: 0.5rem; background: var(--dock-bg); backdrop-filter: blur(12px); border: 1px solid rgba(75, 85, 99, 0.3); border-radius: var(--radius-xl); box-shadow: var(--shadow-lg);",

                for app in apps {
                    DockItem {
                        key: "{app.id}",
                        app,
                        on_open_app,
                    }
                }
            }
        }
    }
}

#[component]
pub fn DockItem(app: AppDefinition, on_open_app: Callback<AppId>) -> Element {
    let app_id = app.id;

    rsx! {
        button {
            class: "dock-item",
            title: "{app.name}",
            style: "position: relative; width: 3.5rem; height: 3.5rem; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; background: rgba(55, 65, 81, 0.2); border: 1px solid rgba(75, 85, 99, 0.2); border-radius: var(--radius-lg); cursor: pointer;",
            onclick: move |_| on_open_app.call(app_id),

            span { style: "pointer-events: none; user-select: none;", "{app.icon}" }
            div {
                class: "dock-indicator",
                style: "position: absolute; bottom: -0.25rem; left: 50%; transform: translateX(-50%); width: 4px; height: 4px; border-radius: 999px; background: {app.color}; box-shadow: 0 0 0 1px #ffffff; opacity: 0; transition: opacity 0.2s;",
            }
        }
    }
}
