//! Polled scalar tweens.
//!
//! A `Tween` is advanced explicitly by the owner each frame and reports its
//! current value and whether it has finished. There are no callbacks: the
//! caller decides what to do on completion.

mod easing;
#[allow(clippy::module_inception)]
mod tween;


pub use easing::Easing;
pub use tween::Tween;
