//! Host seam: the interactive track a slider is rendered on.
//!
//! The value model never talks to a UI toolkit directly. Hosts implement
//! [`PointerSurface`] to expose the track width, pointer capture, and
//! document-level routing of release events.

/// Identifier of one pointer (mouse, pen, touch contact).
pub type PointerId = u32;

/// A pointer-down or pointer-move on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    /// Horizontal offset from the track's left edge.
    pub offset_x: f64,
}

impl PointerEvent {
    pub fn new(pointer_id: PointerId, offset_x: f64) -> Self {
        Self { pointer_id, offset_x }
    }
}

/// Whether the slider consumed an event.
///
/// `Handled` tells the host to suppress its own default behavior for the
/// event (native range-input dragging, text selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Handled,
    Ignored,
}

impl EventDisposition {
    pub fn is_handled(self) -> bool {
        self == EventDisposition::Handled
    }
}

/// The track a [`crate::CyclicSlider`] is attached to.
///
/// Capture routes every later event for the pointer to this track until it is
/// released, or until the host hands capture to someone else, after which
/// [`has_pointer_capture`](PointerSurface::has_pointer_capture) must return
/// `false`.
pub trait PointerSurface {
    /// Rendered width of the track. Non-positive widths disable dragging.
    fn width(&self) -> f64;

    fn set_pointer_capture(&mut self, pointer_id: PointerId);

    fn release_pointer_capture(&mut self, pointer_id: PointerId);

    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool;

    /// Route pointer-up and pointer-cancel for `pointer_id` to the slider even
    /// when they happen outside the track.
    fn listen_document(&mut self, pointer_id: PointerId);

    fn unlisten_document(&mut self, pointer_id: PointerId);
}

/// In-memory surface with a fixed width.
///
/// Used when the model is driven without a UI (replays, tests) and as the
/// reference for what a host must track.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    width: f64,
    captured: Option<PointerId>,
    listening: Option<PointerId>,
}

impl HeadlessSurface {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            captured: None,
            listening: None,
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Pointer currently captured by the track.
    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    /// Pointer whose release events are routed at document level.
    pub fn listening(&self) -> Option<PointerId> {
        self.listening
    }

    /// Simulate another element taking capture mid-drag.
    pub fn steal_capture(&mut self) {
        self.captured = None;
    }
}

impl PointerSurface for HeadlessSurface {
    fn width(&self) -> f64 {
        self.width
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
