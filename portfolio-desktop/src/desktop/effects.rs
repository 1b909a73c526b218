use std::time::Duration;

use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;

use desktop_core::clock::menu_clock_from_parts;
use desktop_core::{DesktopConfig, TypingScript, TypingState};

use crate::interop::{local_time_parts, read_element_text};

pub const CONFIG_ELEMENT_ID: &str = "desktop-config";

/// Host-page overrides when present and valid, defaults otherwise.
pub fn load_desktop_config() -> DesktopConfig {
    let Some(raw) = read_element_text(CONFIG_ELEMENT_ID) else {
        return DesktopConfig::default();
    };

    match DesktopConfig::from_json(&raw) {
        Ok(config) => {
            dioxus_logger::tracing::info!("Loaded desktop config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("Ignoring desktop config, using defaults: {}", e);
            DesktopConfig::default()
        }
    }
}

pub fn current_clock_text() -> String {
    let (hour, minute, second) = local_time_parts();
    menu_clock_from_parts(hour, minute, second).unwrap_or_default()
}

pub async fn tick_clock(mut clock: Signal<String>, tick_ms: u32) {
    loop {
        TimeoutFuture::new(tick_ms).await;
        clock.set(current_clock_text());
    }
}

pub async fn play_typing_script(mut typing: Signal<TypingState>, interval_ms: u32) {
    let script = TypingScript::skills().with_interval(Duration::from_millis(interval_ms.into()));
    typing.set(TypingState::new());

    for frame in script.frames() {
        TimeoutFuture::new(frame.delay.as_millis() as u32).await;
        typing.write().reveal(frame);
    }
}
