//! Cyclic Term — host a cyclic slider inside a crossterm/ratatui application.
//!
//! Provides:
//! - `TerminalSurface`: the slider track as a `Rect` of cells, with
//!   emulated pointer capture for the single terminal mouse
//! - `TermSlider`: value model plus its numeric text box and label/unit
//! - `handle_event`: crossterm mouse, key and focus events → model operations
//!
//! Drawing is left to the host; `TermSlider::readout` and
//! `TermSlider::field_text` give it the strings to show.

pub mod input;
pub mod slider;
pub mod surface;

pub use input::{handle_event, key_bindings_help};
pub use slider::{Focus, TermSlider};
pub use surface::{TerminalSurface, MOUSE_POINTER};
