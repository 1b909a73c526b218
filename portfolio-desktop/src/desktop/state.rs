use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use desktop_core::{DesktopEvent, WindowManager};

/// Route one UI event into the window manager.
pub fn apply_desktop_event(event: DesktopEvent, desktop: &mut Signal<WindowManager>) {
    match event {
        // Fired on every pointer-move; skip the write (and re-render) when nothing is dragged.
        DesktopEvent::UpdateDrag { .. } => {
            if desktop.read().drag_session().is_none() {
                return;
            }
        }
        DesktopEvent::EndDrag => {
            if desktop.read().drag_session().is_none() {
                return;
            }
            dioxus_logger::tracing::debug!(?event, "Desktop event");
        }
        _ => {
            dioxus_logger::tracing::debug!(?event, "Desktop event");
        }
    }

    desktop.write().apply(&event);
}
