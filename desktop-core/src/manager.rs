//! WindowManager - window lifecycle, focus, drag and z-order
//!
//! All state lives in one struct. Every operation is total: an id with no
//! record turns close/minimize/focus/drag into a no-op instead of an error.
//! `reduce` exposes the same operations as `(state, event) -> state`.

use serde::{Deserialize, Serialize};

use crate::apps::AppId;
use crate::config::DesktopConfig;
use crate::drag::DragSession;
use crate::geometry::Point;
use crate::window::WindowRecord;

/// Everything the UI can ask the window manager to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DesktopEvent {
    /// Dock click
    Open { window_id: AppId },
    /// Red title-bar control
    Close { window_id: AppId },
    /// Yellow title-bar control
    Minimize { window_id: AppId },
    /// Click inside a window
    Focus { window_id: AppId },
    /// Pointer-down on a title bar
    BeginDrag { window_id: AppId, pointer: Point },
    /// Pointer-move over the desktop
    UpdateDrag { pointer: Point },
    /// Pointer-up anywhere on the desktop
    EndDrag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManager {
    /// Tracked windows in first-open order
    windows: Vec<WindowRecord>,
    /// Last z-index handed out
    highest_z_index: u32,
    drag: Option<DragSession>,
    cascade_origin: Point,
    cascade_step: i32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(&DesktopConfig::default())
    }
}

impl WindowManager {
    pub fn new(config: &DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            highest_z_index: config.z_index_base,
            drag: None,
            cascade_origin: config.cascade_origin,
            cascade_step: config.cascade_step,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Pure form: consume the state, return the next one.
    pub fn reduce(mut self, event: DesktopEvent) -> Self {
        self.apply(&event);
        self
    }

    pub fn apply(&mut self, event: &DesktopEvent) {
        match *event {
            DesktopEvent::Open { window_id } => self.open_window(window_id),
            DesktopEvent::Close { window_id } => self.close_window(window_id),
            DesktopEvent::Minimize { window_id } => self.minimize_window(window_id),
            DesktopEvent::Focus { window_id } => self.focus_window(window_id),
            DesktopEvent::BeginDrag { window_id, pointer } => self.begin_drag(window_id, pointer),
            DesktopEvent::UpdateDrag { pointer } => self.update_drag(pointer),
            DesktopEvent::EndDrag => self.end_drag(),
        }
    }

    /// Open a window, or bring an existing one back and raise it.
    pub fn open_window(&mut self, window_id: AppId) {
        if let Some(index) = self.index_of(window_id) {
            let z_index = self.next_z();
            let window = &mut self.windows[index];
            let was_minimized = window.is_minimized;
            window.is_minimized = false;
            window.z_index = z_index;
            tracing::debug!(
                window_id = %window_id,
                z_index,
                restored = was_minimized,
                "Window raised"
            );
            return;
        }

        let position = self.default_position();
        let z_index = self.next_z();
        self.windows.push(WindowRecord {
            id: window_id,
            is_minimized: false,
            position,
            z_index,
        });
        tracing::debug!(
            window_id = %window_id,
            x = position.x,
            y = position.y,
            z_index,
            "Window opened"
        );
    }

    /// Drop the record. Reopening starts from a fresh default position.
    pub fn close_window(&mut self, window_id: AppId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != window_id);
        if self.windows.len() == before {
            return;
        }

        if self.is_dragging(window_id) {
            self.drag = None;
        }
        tracing::debug!(window_id = %window_id, "Window closed");
    }

    /// Hide the window but keep its position and z-index.
    pub fn minimize_window(&mut self, window_id: AppId) {
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == window_id) {
            window.is_minimized = true;
            tracing::debug!(window_id = %window_id, "Window minimized");
        }
    }

    /// Bring an already tracked window to the front.
    pub fn focus_window(&mut self, window_id: AppId) {
        if self.index_of(window_id).is_some() {
            self.raise(window_id);
        }
    }

    pub fn begin_drag(&mut self, window_id: AppId, pointer: Point) {
        let Some(window) = self.window(window_id).copied() else {
            return;
        };
        if window.is_minimized {
            return;
        }

        self.drag = Some(DragSession::start(window_id, pointer, window.position));
        self.raise(window_id);
    }

    pub fn update_drag(&mut self, pointer: Point) {
        let Some(session) = self.drag else {
            return;
        };
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == session.window_id) {
            window.position = session.position_for(pointer);
        }
    }

    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(window_id = %session.window_id, "Drag ended");
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn window(&self, window_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Every tracked window, minimized ones included, in first-open order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Render set: windows that are not minimized.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> + '_ {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Frontmost visible window
    pub fn top_window(&self) -> Option<&WindowRecord> {
        self.visible_windows().max_by_key(|w| w.z_index)
    }

    pub fn is_open(&self, window_id: AppId) -> bool {
        self.index_of(window_id).is_some()
    }

    pub fn is_dragging(&self, window_id: AppId) -> bool {
        self.drag.is_some_and(|d| d.window_id == window_id)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn highest_z_index(&self) -> u32 {
        self.highest_z_index
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn index_of(&self, window_id: AppId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == window_id)
    }

    /// Get next z-index and advance the counter
    fn next_z(&mut self) -> u32 {
        self.highest_z_index = self.highest_z_index.saturating_add(1);
        self.highest_z_index
    }

    fn raise(&mut self, window_id: AppId) {
        let z_index = self.next_z();
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == window_id) {
            window.z_index = z_index;
            tracing::debug!(window_id = %window_id, z_index, "Window focused");
        }
    }

    /// Cascade from the origin by the number of tracked windows
    fn default_position(&self) -> Point {
        let count = i32::try_from(self.windows.len()).unwrap_or(i32::MAX);
        let offset = count.saturating_mul(self.cascade_step);
        Point::new(
            self.cascade_origin.x.saturating_add(offset),
            self.cascade_origin.y.saturating_add(offset),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(ids: &[AppId]) -> WindowManager {
        ids.iter().fold(WindowManager::default(), |state, &window_id| {
            state.reduce(DesktopEvent::Open { window_id })
        })
    }

    #[test]
    fn open_window_creates_window_with_defaults() {
        let manager = open(&[AppId::About]);

        let window = manager.window(AppId::About).expect("about should be open");
        assert_eq!(window.position, Point::new(100, 100));
        assert_eq!(window.z_index, 1001);
        assert!(!window.is_minimized);
        assert_eq!(manager.highest_z_index(), 1001);
    }

    #[test]
    fn new_windows_cascade() {
        let manager = open(&[AppId::About, AppId::Projects, AppId::Contact]);

        let positions: Vec<_> = manager.windows().iter().map(|w| w.position).collect();
        assert_eq!(
            positions,
            [Point::new(100, 100), Point::new(130, 130), Point::new(160, 160)]
        );
    }

    #[test]
    fn reopening_an_open_window_only_raises_it() {
        let mut manager = open(&[AppId::About, AppId::Skills]);
        manager.open_window(AppId::About);

        assert_eq!(manager.windows().len(), 2);
        assert_eq!(manager.window(AppId::About).unwrap().z_index, 1003);
        assert_eq!(manager.window(AppId::About).unwrap().position, Point::new(100, 100));
        assert_eq!(manager.top_window().unwrap().id, AppId::About);
    }

    #[test]
    fn close_window_removes_it() {
        let mut manager = open(&[AppId::Contact]);
        manager.close_window(AppId::Contact);

        assert!(manager.window(AppId::Contact).is_none());
        assert!(manager.windows().is_empty());
    }

    #[test]
    fn close_of_unknown_window_is_noop() {
        let mut manager = open(&[AppId::About]);
        let before = manager.clone();
        manager.close_window(AppId::Skills);
        assert_eq!(manager, before);
    }

    #[test]
    fn minimize_keeps_the_record() {
        let mut manager = open(&[AppId::About, AppId::Projects]);
        manager.minimize_window(AppId::Projects);

        let projects = manager.window(AppId::Projects).unwrap();
        assert!(projects.is_minimized);
        assert_eq!(projects.z_index, 1002);
        assert_eq!(projects.position, Point::new(130, 130));

        let visible: Vec<_> = manager.visible_windows().map(|w| w.id).collect();
        assert_eq!(visible, [AppId::About]);
    }

    #[test]
    fn minimized_windows_still_count_for_cascade() {
        let mut manager = open(&[AppId::About]);
        manager.minimize_window(AppId::About);
        manager.open_window(AppId::Skills);

        assert_eq!(manager.window(AppId::Skills).unwrap().position, Point::new(130, 130));
    }

    #[test]
    fn counter_saturates_instead_of_overflowing() {
        let config = DesktopConfig {
            z_index_base: u32::MAX - 1,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(&config);
        manager.open_window(AppId::About);
        manager.open_window(AppId::Skills);
        manager.focus_window(AppId::About);

        assert_eq!(manager.highest_z_index(), u32::MAX);
        assert_eq!(manager.window(AppId::About).unwrap().z_index, u32::MAX);
    }

    #[test]
    fn huge_cascade_step_clamps_positions() {
        let config = DesktopConfig {
            cascade_step: i32::MAX,
            ..DesktopConfig::default()
        };
        let manager = AppId::ALL.iter().fold(WindowManager::new(&config), |state, &window_id| {
            state.reduce(DesktopEvent::Open { window_id })
        });

        assert_eq!(manager.windows().len(), 5);
        assert_eq!(manager.window(AppId::Contact).unwrap().position, Point::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn focus_of_missing_window_does_not_touch_counter() {
        let mut manager = open(&[AppId::About]);
        manager.focus_window(AppId::Contact);
        assert_eq!(manager.highest_z_index(), 1001);
    }

    #[test]
    fn begin_drag_requires_visible_window() {
        let mut manager = open(&[AppId::About]);
        manager.minimize_window(AppId::About);
        manager.begin_drag(AppId::About, Point::new(110, 105));

        assert!(manager.drag_session().is_none());
        assert_eq!(manager.highest_z_index(), 1001);

        manager.begin_drag(AppId::Skills, Point::new(0, 0));
        assert!(manager.drag_session().is_none());
    }

    #[test]
    fn drag_moves_by_pointer_delta_without_raising() {
        let mut manager = open(&[AppId::About, AppId::Projects]);
        manager.begin_drag(AppId::About, Point::new(150, 110));
        assert_eq!(manager.window(AppId::About).unwrap().z_index, 1003);
        assert!(manager.is_dragging(AppId::About));

        manager.update_drag(Point::new(170, 150));
        manager.update_drag(Point::new(250, 210));

        let about = manager.window(AppId::About).unwrap();
        assert_eq!(about.position, Point::new(200, 200));
        assert_eq!(about.z_index, 1003);
        assert_eq!(manager.highest_z_index(), 1003);
    }

    #[test]
    fn end_drag_is_safe_without_session() {
        let mut manager = open(&[AppId::About]);
        let before = manager.clone();

        manager.end_drag();
        manager.update_drag(Point::new(999, 999));

        assert_eq!(manager, before);
    }

    #[test]
    fn moves_after_end_drag_are_ignored() {
        let mut manager = open(&[AppId::About]);
        manager.begin_drag(AppId::About, Point::new(100, 100));
        manager.update_drag(Point::new(140, 120));
        manager.end_drag();
        manager.update_drag(Point::new(500, 500));

        assert_eq!(manager.window(AppId::About).unwrap().position, Point::new(140, 120));
        assert!(!manager.is_dragging(AppId::About));
    }

    #[test]
    fn closing_the_dragged_window_ends_the_drag() {
        let mut manager = open(&[AppId::Skills]);
        manager.begin_drag(AppId::Skills, Point::new(120, 110));
        manager.close_window(AppId::Skills);
        assert!(manager.drag_session().is_none());

        manager.open_window(AppId::Skills);
        manager.update_drag(Point::new(600, 600));
        assert_eq!(manager.window(AppId::Skills).unwrap().position, Point::new(100, 100));
    }

    #[test]
    fn custom_config_sets_base_and_cascade() {
        let config = DesktopConfig {
            z_index_base: 10,
            cascade_origin: Point::new(0, 40),
            cascade_step: 20,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(&config);
        manager.open_window(AppId::About);
        manager.open_window(AppId::Contact);

        let contact = manager.window(AppId::Contact).unwrap();
        assert_eq!(contact.position, Point::new(20, 60));
        assert_eq!(contact.z_index, 12);
    }

    #[test]
    fn events_deserialize_from_tagged_json() {
        let event: DesktopEvent = serde_json::from_str(
            r#"{ "type": "begin_drag", "window_id": "skills", "pointer": { "x": 4, "y": 8 } }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            DesktopEvent::BeginDrag {
                window_id: AppId::Skills,
                pointer: Point::new(4, 8),
            }
        );
    }
}
