//! Platform pointer input.
//!
//! Turns a left mouse press or the first new touch of a frame into a
//! `PointerPressed` event for the hit-test.

mod pointer;


pub use pointer::{capture_pointer_presses, first_touch_position};
