//! Terminal track surface.
//!
//! A terminal has one mouse and no native pointer capture, so capture and
//! document-level routing are plain flags that the event dispatcher consults.

use ratatui::layout::{Position, Rect};

use cyclic_core::{PointerId, PointerSurface};

/// Pointer id used for the terminal mouse.
pub const MOUSE_POINTER: PointerId = 1;

/// Track occupying a rectangle of terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSurface {
    area: Rect,
    captured: Option<PointerId>,
    listening: Option<PointerId>,
}

impl TerminalSurface {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            captured: None,
            listening: None,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Move or resize the track (layout changed, terminal resized).
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Whether a cell lies on the track.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Track offset of an absolute column. Negative left of the track.
    pub fn offset_of(&self, column: u16) -> f64 {
        f64::from(column) - f64::from(self.area.x)
    }

    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether release events must be routed here from anywhere on screen.
    pub fn is_listening(&self) -> bool {
        self.listening.is_some()
    }

    /// Another widget grabbed the mouse.
    pub fn lose_capture(&mut self) {
        self.captured = None;
    }
}

impl PointerSurface for TerminalSurface {
    fn width(&self) -> f64 {
        f64::from(self.area.width)
    }

    fn set_pointer_capture(&mut self, pointer_id: PointerId) {
        self.captured = Some(pointer_id);
    }

    fn release_pointer_capture(&mut self, pointer_id: PointerId) {
        if self.captured == Some(pointer_id) {
            self.captured = None;
        }
    }

    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool {
        self.captured == Some(pointer_id)
    }

    fn listen_document(&mut self, pointer_id: PointerId) {
        self.listening = Some(pointer_id);
    }

    fn unlisten_document(&mut self, pointer_id: PointerId) {
        if self.listening == Some(pointer_id) {
            self.listening = None;
        }
    }
}
