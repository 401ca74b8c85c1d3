//! Cyclic value model — value state, drag state machine, callback dispatch.
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_move--> Dragging
//!   ^                       |
//!   +--pointer_up/cancel----+   (commit scratch value once)
//!   +--teardown/drop--------+   (release only, no commit)
//! ```
//!
//! Two callback channels:
//! - **live** (`on_input`): every typed value, increment, pointer-down and
//!   processed pointer-move.
//! - **committed** (`on_change`): once per finished interaction (pointer
//!   released or cancelled, text field committed).

use std::fmt;

use crate::domain::{DomainError, SliderDomain};
use crate::mapping;
use crate::surface::{EventDisposition, PointerEvent, PointerId, PointerSurface};

/// Boxed value callback.
pub type Callback = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct Callbacks {
    on_input: Option<Callback>,
    on_change: Option<Callback>,
}

impl Callbacks {
    fn live(&mut self, value: f64) {
        if let Some(cb) = self.on_input.as_mut() {
            cb(value);
        }
    }

    fn committed(&mut self, value: f64) {
        if let Some(cb) = self.on_change.as_mut() {
            cb(value);
        }
    }
}

/// One pointer interaction in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Track width sampled at pointer-down.
    pub width: f64,
    /// Last value produced by this drag; delivered on release.
    pub scratch: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging(DragSession),
}

/// Headless cyclic slider bound to a host surface.
pub struct CyclicSlider<S: PointerSurface> {
    domain: SliderDomain,
    value: f64,
    interaction: Interaction,
    surface: S,
    callbacks: Callbacks,
}

impl<S: PointerSurface> CyclicSlider<S> {
    /// Seed a slider with its initial authoritative value.
    ///
    /// The value is kept as given, even outside the domain; only non-finite
    /// values are rejected.
    pub fn new(value: f64, domain: SliderDomain, surface: S) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NonFinite {
                field: "value",
                value,
            });
        }
        Ok(Self {
            domain,
            value,
            interaction: Interaction::Idle,
            surface,
            callbacks: Callbacks::default(),
        })
    }

    /// Register the live channel.
    pub fn on_input(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.callbacks.on_input = Some(Box::new(f));
        self
    }

    /// Register the committed channel.
    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(f));
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn domain(&self) -> &SliderDomain {
        &self.domain
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging(_))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ── Value reconciliation ───────────────────────────────────────────

    /// Adopt an externally supplied value unless a drag is in progress.
    ///
    /// Returns `true` if the value changed. Fires no callbacks.
    pub fn reconcile(&mut self, external: f64) -> bool {
        if !external.is_finite() {
            log::warn!("ignoring non-finite external value {external}");
            return false;
        }
        if self.is_dragging() || external == self.value {
            return false;
        }
        self.value = external;
        true
    }

    // ── Numeric input ──────────────────────────────────────────────────

    /// Typed or incremented value: wrap, store, fire live.
    ///
    /// Returns the wrapped value, or `None` if `raw` was not finite or a
    /// drag is in progress (the drag owns the value until release).
    pub fn input(&mut self, raw: f64) -> Option<f64> {
        if !raw.is_finite() {
            log::warn!("ignoring non-finite input {raw}");
            return None;
        }
        if self.is_dragging() {
            log::debug!("ignoring input {raw} during drag");
            return None;
        }
        let wrapped = self.domain.wrap(raw);
        self.value = wrapped;
        self.callbacks.live(wrapped);
        Some(wrapped)
    }

    /// Native increment control.
    pub fn step_up(&mut self) -> Option<f64> {
        self.input(self.value + self.domain.step())
    }

    /// Native decrement control.
    pub fn step_down(&mut self) -> Option<f64> {
        self.input(self.value - self.domain.step())
    }

    /// Finalized text input: forward `raw` unchanged to the committed channel.
    pub fn commit(&mut self, raw: f64) -> bool {
        if !raw.is_finite() {
            log::warn!("ignoring non-finite commit {raw}");
            return false;
        }
        self.callbacks.committed(raw);
        true
    }

    // ── Pointer interaction ────────────────────────────────────────────

    /// Idle → Dragging.
    pub fn pointer_down(&mut self, event: PointerEvent) -> EventDisposition {
        if self.is_dragging() {
            log::debug!(
                "pointer {} down ignored: drag already in progress",
                event.pointer_id
            );
            return EventDisposition::Ignored;
        }
        let width = self.surface.width();
        let Some(initial) = mapping::initial_value(event.offset_x, width, &self.domain) else {
            log::debug!(
                "pointer {} down ignored: offset {} on width {}",
                event.pointer_id,
                event.offset_x,
                width
            );
            return EventDisposition::Ignored;
        };

        self.surface.set_pointer_capture(event.pointer_id);
        self.surface.listen_document(event.pointer_id);
        self.interaction = Interaction::Dragging(DragSession {
            pointer_id: event.pointer_id,
            width,
            scratch: initial,
        });
        log::debug!("drag start: pointer {} at {initial}", event.pointer_id);

        self.value = initial;
        self.callbacks.live(initial);
        EventDisposition::Handled
    }

    /// Dragging → Dragging.
    ///
    /// Moves from other pointers, moves after capture was lost, and moves
    /// with unusable offsets are ignored.
    pub fn pointer_move(&mut self, event: PointerEvent) -> EventDisposition {
        let Interaction::Dragging(session) = &mut self.interaction else {
            return EventDisposition::Ignored;
        };
        if session.pointer_id != event.pointer_id
            || !self.surface.has_pointer_capture(event.pointer_id)
        {
            return EventDisposition::Ignored;
        }
        let Some(normalized) = mapping::drag_value(event.offset_x, session.width, &self.domain)
        else {
            return EventDisposition::Ignored;
        };

        session.scratch = normalized;
        log::trace!("drag move: pointer {} → {normalized}", event.pointer_id);

        self.value = normalized;
        self.callbacks.live(normalized);
        EventDisposition::Handled
    }

    /// Dragging → Idle on release. Returns the committed value.
    pub fn pointer_up(&mut self, pointer_id: PointerId) -> Option<f64> {
        self.finish_drag(pointer_id, "up")
    }

    /// Dragging → Idle on platform cancel. Commits like [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(&mut self, pointer_id: PointerId) -> Option<f64> {
        self.finish_drag(pointer_id, "cancel")
    }

    /// Abandon any drag without committing (widget going away).
    pub fn teardown(&mut self) {
        if let Some(session) = self.end_session() {
            log::debug!(
                "drag torn down: pointer {} at {}",
                session.pointer_id,
                session.scratch
            );
        }
    }

    fn finish_drag(&mut self, pointer_id: PointerId, reason: &str) -> Option<f64> {
        match self.interaction {
            Interaction::Dragging(session) if session.pointer_id == pointer_id => {}
            _ => return None,
        }
        let session = self.end_session()?;
        log::debug!(
            "drag end ({reason}): pointer {} commits {}",
            session.pointer_id,
            session.scratch
        );
        self.callbacks.committed(session.scratch);
        Some(session.scratch)
    }

    /// Release everything acquired at pointer-down and return to Idle.
    fn end_session(&mut self) -> Option<DragSession> {
        let Interaction::Dragging(session) = self.interaction else {
            return None;
        };
        self.interaction = Interaction::Idle;
        self.surface.release_pointer_capture(session.pointer_id);
        self.surface.unlisten_document(session.pointer_id);
        Some(session)
    }
}

impl<S: PointerSurface> Drop for CyclicSlider<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: PointerSurface + fmt::Debug> fmt::Debug for CyclicSlider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicSlider")
            .field("domain", &self.domain)
            .field("value", &self.value)
            .field("interaction", &self.interaction)
            .field("surface", &self.surface)
            .field("on_input", &self.callbacks.on_input.is_some())
            .field("on_change", &self.callbacks.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<f64>>>;

    fn recorded(value: f64, domain: SliderDomain) -> (CyclicSlider<HeadlessSurface>, Log, Log) {
        let live: Log = Rc::default();
        let committed: Log = Rc::default();
        let (l, c) = (live.clone(), committed.clone());
        let slider = CyclicSlider::new(value, domain, HeadlessSurface::new(360.0))
            .unwrap()
            .on_input(move |v| l.borrow_mut().push(v))
            .on_change(move |v| c.borrow_mut().push(v));
        (slider, live, committed)
    }

    #[test]
    fn rejects_non_finite_seed() {
        let err = CyclicSlider::new(f64::NAN, SliderDomain::default(), HeadlessSurface::new(1.0));
        assert!(err.is_err());
    }

    #[test]
    fn typed_value_fires_live_only() {
        let (mut s, live, committed) = recorded(45.0, SliderDomain::default());
        assert_eq!(s.input(370.0), Some(10.0));
        assert_eq!(s.value(), 10.0);
        assert_eq!(*live.borrow(), vec![10.0]);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let (mut s, live, _) = recorded(45.0, SliderDomain::default());
        assert_eq!(s.input(f64::NAN), None);
        assert_eq!(s.input(f64::INFINITY), None);
        assert_eq!(s.value(), 45.0);
        assert!(live.borrow().is_empty());
    }

    #[test]
    fn commit_forwards_verbatim() {
        let (mut s, live, committed) = recorded(45.0, SliderDomain::default());
        assert!(s.commit(370.0));
        assert_eq!(*committed.borrow(), vec![370.0]);
        assert!(live.borrow().is_empty());
        assert!(!s.commit(f64::NAN));
        assert_eq!(committed.borrow().len(), 1);
    }

    #[test]
    fn steps_wrap_around() {
        let (mut s, live, _) = recorded(359.0, SliderDomain::default());
        assert_eq!(s.step_up(), Some(0.0));
        assert_eq!(s.step_down(), Some(359.0));
        assert_eq!(*live.borrow(), vec![0.0, 359.0]);
    }

    #[test]
    fn missing_callbacks_are_fine() {
        let mut s =
            CyclicSlider::new(0.0, SliderDomain::default(), HeadlessSurface::new(360.0)).unwrap();
        s.input(10.0);
        s.pointer_down(PointerEvent::new(1, 90.0));
        s.pointer_move(PointerEvent::new(1, 100.0));
        assert_eq!(s.pointer_up(1), Some(100.0));
        assert!(s.commit(5.0));
    }

    #[test]
    fn pointer_down_captures_and_fires_live() {
        let (mut s, live, committed) = recorded(0.0, SliderDomain::default());
        let d = s.pointer_down(PointerEvent::new(7, 90.0));
        assert!(d.is_handled());
        assert_eq!(s.value(), 90.0);
        assert_eq!(*live.borrow(), vec![90.0]);
        assert!(committed.borrow().is_empty());
        assert_eq!(s.surface().captured(), Some(7));
        assert_eq!(s.surface().listening(), Some(7));
        assert_eq!(
            s.interaction(),
            Interaction::Dragging(DragSession {
                pointer_id: 7,
                width: 360.0,
                scratch: 90.0
            })
        );
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let (mut s, live, _) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        assert_eq!(
            s.pointer_down(PointerEvent::new(2, 200.0)),
            EventDisposition::Ignored
        );
        assert_eq!(live.borrow().len(), 1);
        assert_eq!(s.surface().captured(), Some(1));
    }

    #[test]
    fn zero_width_track_does_not_start_drag() {
        let (mut s, live, _) = recorded(0.0, SliderDomain::default());
        s.surface_mut().set_width(0.0);
        assert_eq!(
            s.pointer_down(PointerEvent::new(1, 10.0)),
            EventDisposition::Ignored
        );
        assert!(!s.is_dragging());
        assert!(live.borrow().is_empty());
        assert_eq!(s.surface().captured(), None);
    }

    #[test]
    fn release_commits_scratch_and_releases_surface() {
        let (mut s, _, committed) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        s.pointer_move(PointerEvent::new(1, 45.0));
        assert_eq!(s.pointer_up(1), Some(45.0));
        assert_eq!(*committed.borrow(), vec![45.0]);
        assert!(!s.is_dragging());
        assert_eq!(s.surface().captured(), None);
        assert_eq!(s.surface().listening(), None);
    }

    #[test]
    fn release_of_other_pointer_is_ignored() {
        let (mut s, _, committed) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        assert_eq!(s.pointer_up(2), None);
        assert!(s.is_dragging());
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn release_while_idle_is_noop() {
        let (mut s, _, committed) = recorded(0.0, SliderDomain::default());
        assert_eq!(s.pointer_up(1), None);
        assert_eq!(s.pointer_cancel(1), None);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn moves_from_other_pointers_are_ignored() {
        let (mut s, live, _) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        assert_eq!(
            s.pointer_move(PointerEvent::new(2, 50.0)),
            EventDisposition::Ignored
        );
        assert_eq!(s.value(), 10.0);
        assert_eq!(live.borrow().len(), 1);
    }

    #[test]
    fn teardown_releases_without_commit() {
        let (mut s, _, committed) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        s.teardown();
        assert!(!s.is_dragging());
        assert_eq!(s.surface().captured(), None);
        assert_eq!(s.surface().listening(), None);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn drop_mid_drag_does_not_commit() {
        let (mut s, _, committed) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        drop(s);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn input_and_steps_are_ignored_mid_drag() {
        let (mut s, live, committed) = recorded(0.0, SliderDomain::default());
        s.pointer_down(PointerEvent::new(1, 10.0));
        s.pointer_move(PointerEvent::new(1, 180.0));
        assert_eq!(s.input(5.0), None);
        assert_eq!(s.step_up(), None);
        assert_eq!(s.step_down(), None);
        assert_eq!(s.value(), 180.0);
        assert_eq!(s.pointer_up(1), Some(180.0));
        assert_eq!(*live.borrow(), vec![10.0, 180.0]);
        assert_eq!(*committed.borrow(), vec![180.0]);

        assert_eq!(s.input(5.0), Some(5.0));
    }

    #[test]
    fn reconcile_ignores_equal_and_non_finite() {
        let (mut s, live, _) = recorded(45.0, SliderDomain::default());
        assert!(!s.reconcile(45.0));
        assert!(!s.reconcile(f64::NAN));
        assert!(s.reconcile(90.0));
        assert_eq!(s.value(), 90.0);
        assert!(live.borrow().is_empty());
    }
}
