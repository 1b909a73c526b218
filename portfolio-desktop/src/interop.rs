use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use wasm_bindgen::JsCast;

use desktop_core::Point;

/// Pointer position in client (viewport) coordinates.
pub fn pointer_point(e: &PointerEvent) -> Point {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return Point::new(x, y);
    }

    let point = e.data().client_coordinates();
    Point::new(point.x as i32, point.y as i32)
}

/// Buttons currently held, or `None` when there is no underlying web event.
pub fn pointer_buttons(e: &PointerEvent) -> Option<u16> {
    e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| pointer.buttons())
    })
}

/// True when the pointer went down on a title-bar button rather than the bar itself.
pub fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

/// Text of a host-page element, e.g. `<script id="desktop-config" type="application/json">`.
pub fn read_element_text(element_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(element_id)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Local wall-clock (hour, minute, second) from the browser.
pub fn local_time_parts() -> (u32, u32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_hours(), now.get_minutes(), now.get_seconds())
}
