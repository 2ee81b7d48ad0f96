//! Per-tick token physics
//!
//! One tick runs three passes over the population in spawn order:
//! integrate + wall bounce for every token, pairwise overlap resolution, then a
//! position-only containment clamp so a pair push never leaves a token in a wall.
//! Nothing here can fail; degenerate inputs (coincident centres, NaN) are skipped.

use super::container::Interior;
use super::token::Token;
use crate::settings::JarConfig;

/// Per-tick physics constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    pub friction: f32,
    pub bounce: f32,
    pub rest_threshold: f32,
}

impl Physics {
    pub fn from_config(config: &JarConfig) -> Self {
        Self {
            gravity: config.gravity,
            friction: config.friction,
            bounce: config.bounce,
            rest_threshold: config.rest_threshold,
        }
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::from_config(&JarConfig::default())
    }
}

/// Which walls a token touched during one wall pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }
}

/// Explicit Euler step: gravity on vy, exponential decay on vx
#[inline]
pub fn integrate(token: &mut Token, physics: &Physics) {
    token.vel.y += physics.gravity;
    token.vel.x *= physics.friction;
    token.pos += token.vel;
}

/// Clamp against each wall in turn (left, right, bottom, top), inverting and
/// damping the matching velocity component. A floor bounce slower than the rest
/// threshold stops dead.
pub fn resolve_walls(token: &mut Token, walls: &Interior, physics: &Physics) -> WallHits {
    let r = token.radius;
    let mut hits = WallHits::default();

    if token.pos.x - r < walls.min.x {
        token.pos.x = walls.min.x + r;
        token.vel.x *= -physics.bounce;
        hits.left = true;
    }
    if token.pos.x + r > walls.max.x {
        token.pos.x = walls.max.x - r;
        token.vel.x *= -physics.bounce;
        hits.right = true;
    }
    if token.pos.y + r > walls.max.y {
        token.pos.y = walls.max.y - r;
        token.vel.y *= -physics.bounce;
        if token.vel.y.abs() < physics.rest_threshold {
            token.vel.y = 0.0;
        }
        hits.bottom = true;
    }
    if token.pos.y - r < walls.min.y {
        token.pos.y = walls.min.y + r;
        token.vel.y *= -physics.bounce;
        hits.top = true;
    }

    hits
}

/// Push two overlapping tokens apart by half the overlap each and hand each
/// one half of the other's velocity. Returns false (and changes nothing) when
/// the discs don't overlap or their centres coincide.
pub fn resolve_pair(a: &mut Token, b: &mut Token) -> bool {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let min_dist = a.radius + b.radius;
    // NaN fails both comparisons
    if !(dist > 0.0 && dist < min_dist) {
        return false;
    }

    let k = (min_dist - dist) * 0.5;
    let n = delta / dist;
    a.pos -= n * k;
    b.pos += n * k;

    let a_vel = a.vel;
    a.vel = b.vel * 0.5;
    b.vel = a_vel * 0.5;
    true
}

/// Position-only clamp into the walls (same order as `resolve_walls`)
#[inline]
pub fn contain(token: &mut Token, walls: &Interior) {
    let r = token.radius;
    if token.pos.x - r < walls.min.x {
        token.pos.x = walls.min.x + r;
    }
    if token.pos.x + r > walls.max.x {
        token.pos.x = walls.max.x - r;
    }
    if token.pos.y + r > walls.max.y {
        token.pos.y = walls.max.y - r;
    }
    if token.pos.y - r < walls.min.y {
        token.pos.y = walls.min.y + r;
    }
}

/// Summary of one tick (diagnostics only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub wall_hits: usize,
    pub contacts: usize,
}

/// Advance every token by one tick
pub fn tick(tokens: &mut [Token], walls: &Interior, physics: &Physics) -> TickStats {
    let mut stats = TickStats::default();

    for token in tokens.iter_mut() {
        integrate(token, physics);
        if resolve_walls(token, walls, physics).any() {
            stats.wall_hits += 1;
        }
    }

    // Earlier-spawned tokens resolve first; later corrections win
    for i in 0..tokens.len() {
        let (head, tail) = tokens.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                stats.contacts += 1;
            }
        }
    }

    for token in tokens.iter_mut() {
        contain(token, walls);
    }

    stats
}
