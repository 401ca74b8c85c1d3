//! Cyclic Core — headless value model for sliders that wrap instead of clamp.
//!
//! Angles, hues and clock hours live on a circle: dragging past one end of
//! the track re-enters from the other. This crate holds everything except
//! rendering:
//! - Domain validation (`[min, max)` plus a step hint)
//! - One Euclidean wrap law shared by typed, stepped and dragged input
//! - Pointer offset → value mapping
//! - Idle/Dragging state machine with pointer capture through a host surface
//! - Live (`on_input`) and committed (`on_change`) callback channels
//! - Text model for the numeric entry box
//! - TOML configuration

pub mod config;
pub mod domain;
pub mod field;
pub mod mapping;
pub mod model;
pub mod surface;
pub mod wrap;

pub use config::{ConfigError, SliderConfig};
pub use domain::{DomainError, SliderDomain};
pub use field::NumberField;
pub use model::{CyclicSlider, DragSession, Interaction};
pub use surface::{EventDisposition, HeadlessSurface, PointerEvent, PointerId, PointerSurface};
pub use wrap::{wrap, wrap_simple};
