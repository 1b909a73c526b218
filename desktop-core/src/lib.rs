//! Desktop core - window state and static content for the portfolio desktop
//!
//! Everything here is plain Rust with no UI runtime:
//! - the app catalog shown in the dock
//! - the window manager state machine (open/close/minimize/focus/drag/z-order)
//! - the scripted terminal reveal used by the Skills window
//! - the static portfolio content rendered by each window
//!
//! The Dioxus front-end owns a single `WindowManager` and feeds it `DesktopEvent`s.

pub mod apps;
pub mod clock;
pub mod config;
pub mod content;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod manager;
pub mod typing;
pub mod window;

pub use apps::{core_apps, AppDefinition, AppId, WindowContent};
pub use config::{DesktopConfig, DOCK_Z_INDEX};
pub use drag::DragSession;
pub use error::DesktopError;
pub use geometry::Point;
pub use manager::{DesktopEvent, WindowManager};
pub use typing::{TypingFrame, TypingScript, TypingState};
pub use window::WindowRecord;
