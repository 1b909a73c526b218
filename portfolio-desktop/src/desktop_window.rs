use dioxus::prelude::*;
use desktop_core::{AppId, Point, WindowRecord};

use crate::components::WindowBody;
use crate::interop::{pointer_point, pointer_target_is_window_control};

const TITLEBAR_HEIGHT_PX: i32 = 32;

fn window_style(window: &WindowRecord, is_dragging: bool) -> String {
    let cursor = if is_dragging { "grabbing" } else { "default" };
    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: {}; \
         display: flex; flex-direction: column; background: var(--window-bg, #1f2937); \
         border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); \
         overflow: hidden; box-shadow: var(--shadow-lg); cursor: {cursor};",
        window.position.x,
        window.position.y,
        window.width(),
        window.height(),
        window.z_index,
    )
}

fn titlebar_style(is_dragging: bool) -> String {
    let cursor = if is_dragging { "grabbing" } else { "grab" };
    format!(
        "position: relative; height: {TITLEBAR_HEIGHT_PX}px; flex-shrink: 0; display: flex; \
         align-items: center; justify-content: space-between; padding: 0 1rem; \
         background: var(--titlebar-bg, #374151); border-bottom: 1px solid var(--border-color, #4b5563); \
         cursor: {cursor}; user-select: none; touch-action: none;"
    )
}

#[component]
pub fn FloatingWindow(
    window: WindowRecord,
    is_active: bool,
    is_dragging: bool,
    typing_interval_ms: u32,
    on_close: Callback<AppId>,
    on_minimize: Callback<AppId>,
    on_focus: Callback<AppId>,
    on_begin_drag: Callback<(AppId, Point)>,
) -> Element {
    let window_id = window.id;
    let title = window_id.definition().title;

    rsx! {
        div {
            class: if is_active { "floating-window active" } else { "floating-window" },
            style: "{window_style(&window, is_dragging)}",

            div {
                class: "window-titlebar",
                style: "{titlebar_style(is_dragging)}",
                onpointerdown: move |e| {
                    if pointer_target_is_window_control(&e) {
                        return;
                    }
                    e.prevent_default();
                    on_begin_drag.call((window_id, pointer_point(&e)));
                },

                WindowControls {
                    window_id,
                    on_close,
                    on_minimize,
                }

                div {
                    style: "position: absolute; left: 50%; transform: translateX(-50%); font-size: 0.875rem; font-weight: 500; color: var(--text-primary, #f3f4f6); pointer-events: none;",
                    "{title}"
                }

                div {}
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow: auto;",
                onpointerdown: move |_| {
                    if !is_active {
                        on_focus.call(window_id);
                    }
                },

                WindowBody {
                    key: "{window_id}",
                    app_id: window_id.as_str().to_string(),
                    typing_interval_ms,
                }
            }
        }
    }
}

#[component]
fn WindowControls(
    window_id: AppId,
    on_close: Callback<AppId>,
    on_minimize: Callback<AppId>,
) -> Element {
    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.5rem;",

            button {
                class: "window-control window-close",
                style: "{control_style(\"--control-close\")}",
                "aria-label": "Close",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id);
                },
            }
            button {
                class: "window-control window-minimize",
                style: "{control_style(\"--control-minimize\")}",
                "aria-label": "Minimize",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(window_id);
                },
            }
            // Zoom is decorative
            button {
                class: "window-control window-zoom",
                style: "{control_style(\"--control-zoom\")}",
                "aria-label": "Zoom",
                onpointerdown: move |e| e.stop_propagation(),
            }
        }
    }
}

fn control_style(color_token: &str) -> String {
    format!(
        "width: 12px; height: 12px; padding: 0; background: var({color_token}); border: none; \
         border-radius: 999px; cursor: pointer; transition: filter 0.15s;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: AppId, x: i32, y: i32, z_index: u32) -> WindowRecord {
        WindowRecord {
            id,
            is_minimized: false,
            position: Point::new(x, y),
            z_index,
        }
    }

    #[test]
    fn style_places_window_at_record_position() {
        let style = window_style(&record(AppId::Projects, 130, 130, 1002), false);
        assert!(style.contains("left: 130px; top: 130px;"));
        assert!(style.contains("width: 500px; height: 600px;"));
        assert!(style.contains("z-index: 1002;"));
        assert!(style.contains("cursor: default;"));
    }

    #[test]
    fn skills_window_uses_terminal_size() {
        let style = window_style(&record(AppId::Skills, -20, 40, 1001), true);
        assert!(style.contains("left: -20px; top: 40px;"));
        assert!(style.contains("width: 600px; height: 400px;"));
        assert!(style.contains("cursor: grabbing;"));
    }

    #[test]
    fn titlebar_cursor_follows_drag() {
        assert!(titlebar_style(false).contains("cursor: grab;"));
        assert!(titlebar_style(true).contains("cursor: grabbing;"));
    }

    #[test]
    fn title_comes_from_the_catalog() {
        assert_eq!(AppId::Skills.definition().title, "Terminal");
        assert_eq!(AppId::Contact.definition().title, "Contato");
    }

    #[test]
    fn control_style_uses_color_token() {
        assert!(control_style("--control-close").contains("var(--control-close)"));
    }
}
