//! Pointer position → domain value.
//!
//! Offsets are measured from the left edge of the slider track in the same
//! unit as the track width (pixels, terminal cells). While the pointer is
//! captured, offsets may be negative or exceed the width.

use crate::domain::SliderDomain;
use crate::wrap::round_half_up;

/// Value selected by the pointer-down that starts a drag.
///
/// The track fraction is scaled by the range without adding `min`; the
/// result is then wrapped into the domain. Returns `None` for a non-positive
/// width or a non-finite offset.
pub fn initial_value(offset_x: f64, width: f64, domain: &SliderDomain) -> Option<f64> {
    if !is_usable(offset_x, width) {
        return None;
    }
    let raw = round_half_up(offset_x / width * domain.range());
    Some(domain.wrap(raw))
}

/// Unwrapped value for a pointer move, before normalization.
///
/// `round(((offset_x % width) / width) * range + min) * step`
pub fn drag_raw(offset_x: f64, width: f64, domain: &SliderDomain) -> Option<f64> {
    if !is_usable(offset_x, width) {
        return None;
    }
    let fraction = (offset_x % width) / width;
    Some(round_half_up(fraction * domain.range() + domain.min()) * domain.step())
}

/// Normalized value for a pointer move.
pub fn drag_value(offset_x: f64, width: f64, domain: &SliderDomain) -> Option<f64> {
    drag_raw(offset_x, width, domain).map(|raw| domain.wrap(raw))
}

fn is_usable(offset_x: f64, width: f64) -> bool {
    offset_x.is_finite() && width.is_finite() && width > 0.0
}
