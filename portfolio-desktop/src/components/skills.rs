use dioxus::prelude::*;

use desktop_core::TypingState;

use crate::desktop::effects;

const TERMINAL_HEADER: &str = "Terminal - João Bosco Skills";

/// Reveals the skills script one line per tick. Remounting replays it from the top.
#[component]
pub fn SkillsView(typing_interval_ms: u32) -> Element {
    let typing = use_signal(TypingState::new);

    use_effect(move || {
        spawn(async move {
            effects::play_typing_script(typing, typing_interval_ms).await;
        });
    });

    let displayed = typing.read().displayed().to_string();

    rsx! {
        div {
            style: "height: 100%; padding: 1rem; overflow: auto; background: var(--terminal-bg); color: var(--terminal-text); font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.875rem;",

            div { style: "margin-bottom: 1rem; color: var(--text-muted);", "{TERMINAL_HEADER}" }

            pre {
                style: "margin: 0; white-space: pre-wrap; line-height: 1.6; font-family: inherit;",
                "{displayed}"
                span { class: "terminal-cursor", "█" }
            }
        }
    }
}
