//! Drag state for title-bar moves

use serde::{Deserialize, Serialize};

use crate::apps::AppId;
use crate::geometry::Point;

/// Active title-bar drag. The offset is fixed at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    /// Window being moved
    pub window_id: AppId,
    /// Offset from window origin to cursor
    pub offset: Point,
}

impl DragSession {
    pub fn start(window_id: AppId, pointer: Point, window_position: Point) -> Self {
        Self {
            window_id,
            offset: pointer - window_position,
        }
    }

    /// Window origin that keeps the grab point under `pointer`.
    #[inline]
    pub fn position_for(&self, pointer: Point) -> Point {
        pointer - self.offset
    }
}
