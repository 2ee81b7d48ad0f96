//! Vote Jar - a live voting display
//!
//! Every recorded vote drops a token into a jar; tokens tumble under gravity,
//! bounce off the jar walls and push each other apart.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (container bounds, tokens, physics tick, spawner)
//! - `render`: Render frame contract, text contrast rule and draw list
//! - `events`: Inbound vote/resize/reset events
//! - `shelf`: One jar per ballot option, routing broadcast votes
//! - `settings`: Tunable constants and palette
//! - `platform`: Browser canvas driver and native headless replay

pub mod error;
pub mod events;
pub mod platform;
pub mod render;
pub mod settings;
pub mod shelf;
pub mod sim;

pub use error::{Error, Result};
pub use events::{JarEvent, VoteEvent};
pub use render::{FrameSink, RenderFrame, TokenSnapshot};
pub use settings::JarConfig;
pub use shelf::Shelf;
pub use sim::{ContainerBounds, Jar, Token};

/// Simulation defaults, tuned for one tick per display refresh at 60 Hz
pub mod consts {
    /// Cadence the physics constants were tuned for
    pub const TICKS_PER_SECOND: f32 = 60.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.45;
    /// Horizontal velocity decay applied once per tick
    pub const FRICTION: f32 = 0.99;
    /// Velocity retained (and inverted) on a wall hit
    pub const BOUNCE: f32 = 0.45;
    /// Below this vertical speed a floor bounce comes to rest
    pub const REST_THRESHOLD: f32 = 0.8;

    /// Gap between the surface edge and the jar outline
    pub const JAR_MARGIN: f32 = 30.0;
    /// Walls sit this far inside the outline (stroke width of the border)
    pub const WALL_INSET: f32 = 6.0;
    pub const CORNER_RADIUS: f32 = 22.0;

    pub const TOKEN_RADIUS: f32 = 34.0;
    /// Maximum live tokens per jar; the oldest is evicted beyond this
    pub const POPULATION_CAP: usize = 600;
    /// Largest cap a config may ask for
    pub const MAX_POPULATION_CAP: usize = 100_000;

    /// Spawn x is kept this far from the side outlines
    pub const SPAWN_INSET_X: f32 = 20.0;
    /// Tokens enter this far below the top outline (plus their radius)
    pub const SPAWN_DROP_Y: f32 = 12.0;
    /// Initial horizontal speed is uniform in [-SPAWN_MAX_VX, SPAWN_MAX_VX]
    pub const SPAWN_MAX_VX: f32 = 2.0;

    pub const DEFAULT_LABEL: &str = "vote";
    pub const DEFAULT_COLOR: &str = "#8ab4f8";
}
