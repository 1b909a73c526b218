use dioxus::prelude::*;

use desktop_core::{core_apps, AppId, DesktopEvent, Point, WindowManager};

use crate::desktop::components::dock::Dock;
use crate::desktop::components::menu_bar::MenuBar;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::state::apply_desktop_event;
use crate::interop::{pointer_buttons, pointer_point};

#[component]
pub fn DesktopShell() -> Element {
    let config = use_hook(effects::load_desktop_config);
    let mut desktop = use_signal(|| WindowManager::new(&config));

    let dispatch = use_callback(move |event: DesktopEvent| {
        apply_desktop_event(event, &mut desktop);
    });

    let open_app = use_callback(move |window_id: AppId| {
        dispatch.call(DesktopEvent::Open { window_id });
    });

    let close_window_cb = use_callback(move |window_id: AppId| {
        dispatch.call(DesktopEvent::Close { window_id });
    });

    let minimize_window_cb = use_callback(move |window_id: AppId| {
        dispatch.call(DesktopEvent::Minimize { window_id });
    });

    let focus_window_cb = use_callback(move |window_id: AppId| {
        dispatch.call(DesktopEvent::Focus { window_id });
    });

    let begin_drag_cb = use_callback(move |(window_id, pointer): (AppId, Point)| {
        dispatch.call(DesktopEvent::BeginDrag { window_id, pointer });
    });

    let locale = config.locale.clone();
    let clock_tick_ms = config.clock_tick_ms;
    let typing_interval_ms = config.typing_interval_ms;

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            lang: "{locale}",
            style: "position: relative; width: 100vw; height: 100dvh; display: flex; flex-direction: column; overflow: hidden; background: var(--wallpaper);",
            onpointermove: move |e| {
                if released_outside(pointer_buttons(&e)) {
                    dispatch.call(DesktopEvent::EndDrag);
                    return;
                }
                dispatch.call(DesktopEvent::UpdateDrag { pointer: pointer_point(&e) });
            },
            onpointerup: move |_| dispatch.call(DesktopEvent::EndDrag),

            MenuBar { clock_tick_ms }

            WorkspaceCanvas {
                state: desktop,
                typing_interval_ms,
                on_close: close_window_cb,
                on_minimize: minimize_window_cb,
                on_focus: focus_window_cb,
                on_begin_drag: begin_drag_cb,
            }

            Dock {
                apps: core_apps(),
                on_open_app: open_app,
            }
        }
    }
}

/// A move with no buttons held means the pointer-up happened outside the page.
/// Unknown button state keeps the drag going.
fn released_outside(buttons: Option<u16>) -> bool {
    buttons == Some(0)
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-primary: #111827;
    --bg-secondary: #1f2937;
    --bg-tertiary: #374151;
    --text-primary: #f3f4f6;
    --text-secondary: #d1d5db;
    --text-muted: #9ca3af;
    --accent-text: #60a5fa;
    --border-color: rgba(75, 85, 99, 0.5);

    /* Semantic colors */
    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-tertiary);
    --menubar-bg: rgba(31, 41, 55, 0.9);
    --dock-bg: rgba(31, 41, 55, 0.3);
    --card-bg: var(--bg-tertiary);
    --card-hover-bg: rgba(75, 85, 99, 0.5);
    --terminal-bg: #000000;
    --terminal-text: #4ade80;
    --control-close: #ef4444;
    --control-minimize: #eab308;
    --control-zoom: #22c55e;
    --wallpaper: radial-gradient(circle at 20% 20%, #4c1d95 0%, transparent 55%),
        radial-gradient(circle at 80% 30%, #0e7490 0%, transparent 50%),
        linear-gradient(160deg, #0f172a 0%, #1e1b4b 55%, #312e81 100%);

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --radius-xl: 16px;

    /* Shadows */
    --shadow-lg: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    margin: 0;
    padding: 0;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.dock-item {
    transition: all 0.2s ease-out;
}

.dock-item:hover {
    background: rgba(75, 85, 99, 0.3) !important;
    transform: translateY(-4px) scale(1.1);
}

.dock-item:hover .dock-indicator {
    opacity: 1;
}

.window-control:hover {
    filter: brightness(0.85);
}

.content-card:hover {
    background: var(--card-hover-bg) !important;
}

.contact-link:hover {
    background: #4b5563 !important;
}

@keyframes cursor-blink {
    50% {
        opacity: 0;
    }
}

.terminal-cursor {
    animation: cursor-blink 1s steps(1) infinite;
}
"#;
