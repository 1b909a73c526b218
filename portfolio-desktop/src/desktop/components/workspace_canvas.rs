use dioxus::prelude::*;
use desktop_core::{AppId, Point, WindowManager};

use crate::desktop_window::FloatingWindow;

#[component]
pub fn WorkspaceCanvas(
    state: Signal<WindowManager>,
    typing_interval_ms: u32,
    on_close: Callback<AppId>,
    on_minimize: Callback<AppId>,
    on_focus: Callback<AppId>,
    on_begin_drag: Callback<(AppId, Point)>,
) -> Element {
    let desktop = state.read().clone();
    let active_window = desktop.top_window().map(|w| w.id);

    rsx! {
        div {
            class: "window-canvas",
            style: "flex: 1; position: relative; overflow: hidden;",

            for window in desktop.visible_windows() {
                FloatingWindow {
                    key: "{window.id}",
                    window: *window,
                    is_active: active_window == Some(window.id),
                    is_dragging: desktop.is_dragging(window.id),
                    typing_interval_ms,
                    on_close,
                    on_minimize,
                    on_focus,
                    on_begin_drag,
                }
            }
        }
    }
}
