use serde::{Deserialize, Serialize};

use crate::apps::AppId;
use crate::geometry::Point;

/// Individual window state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: AppId,
    pub is_minimized: bool,
    pub position: Point,
    pub z_index: u32,
}

impl WindowRecord {
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    pub fn width(&self) -> i32 {
        self.id.definition().default_width
    }

    pub fn height(&self) -> i32 {
        self.id.definition().default_height
    }
}
