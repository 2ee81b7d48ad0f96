//! Platform drivers
//!
//! The simulation never schedules itself; a driver calls `Jar::tick` once per
//! display refresh and forwards vote/resize/reset events in between.
//! - `frame_loop`: start/stop generations for a display-driven loop
//! - `web`: canvas + requestAnimationFrame (wasm32 only)
//! - `replay`: headless, seeded replay for the native binary

pub mod frame_loop;
#[cfg(not(target_arch = "wasm32"))]
pub mod replay;
#[cfg(target_arch = "wasm32")]
pub mod web;
