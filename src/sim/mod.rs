//! Deterministic jar simulation
//!
//! Pure and platform-free:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only, owned by each jar
//! - Stable iteration order (spawn order)

pub mod container;
pub mod jar;
pub mod palette;
pub mod tick;
pub mod token;

pub use container::{Container, ContainerBounds, Interior};
pub use jar::Jar;
pub use palette::Palette;
pub use tick::{Physics, TickStats, WallHits, contain, integrate, resolve_pair, resolve_walls};
pub use token::{Population, Token};
