//! Shared utilities: easing curves for scripted transitions and the frame
//! clock that feeds per-frame delta times.

pub mod easing;
pub mod frame_timing;
