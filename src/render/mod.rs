//! Render contract
//!
//! The simulation emits a `RenderFrame` per tick; drawing it is left to a
//! `FrameSink`. `draw` turns a frame into canvas primitives and `contrast`
//! picks the label colour for each token.

pub mod contrast;
pub mod draw;
pub mod frame;

pub use contrast::{Foreground, foreground_for, luminance, rgb_channels};
pub use draw::{DrawCommand, PathOp, build as build_draw_list};
pub use frame::{FnSink, FrameSink, RenderFrame, TokenSnapshot};
