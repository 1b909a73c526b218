use dioxus::prelude::*;

use desktop_core::content::MENU_BAR_TITLE;

use crate::desktop::effects;

#[component]
pub fn MenuBar(clock_tick_ms: u32) -> Element {
    let clock = use_signal(effects::current_clock_text);

    use_effect(move || {
        spawn(async move {
            effects::tick_clock(clock, clock_tick_ms).await;
        });
    });

    rsx! {
        div {
            class: "menu-bar",
            style: "height: 24px; flex-shrink: 0; display: flex; align-items: center; justify-content: space-between; padding: 0 1rem; background: var(--menubar-bg); backdrop-filter: blur(12px); border-bottom: 1px solid var(--border-color); font-size: 0.875rem; color: var(--text-secondary); user-select: none; z-index: 2;",

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                span { "{MENU_BAR_TITLE}" }
            }

            div {
                style: "display: flex; align-items: center; gap: 0.5rem;",
                span { title: "Wi-Fi", "📶" }
                span { title: "Bateria", "🔋" }
                span { title: "Relógio", "🕒" }
                span {
                    style: "font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.75rem;",
                    "{clock}"
                }
            }
        }
    }
}
