//! Jar bounds
//!
//! The jar is a rounded rectangle inset from the display surface by a fixed
//! margin. Walls for collision sit a further `wall_inset` inside the outline
//! so tokens never overlap the drawn stroke.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::JarConfig;

/// The rounded-rectangle outline of a jar, in surface units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

impl ContainerBounds {
    /// Bounds for a surface of the given size. Surfaces smaller than twice the
    /// margin (or non-finite sizes) yield a zero-sized outline, never a negative one.
    pub fn from_surface(surface_width: f32, surface_height: f32, margin: f32, corner_radius: f32) -> Self {
        Self {
            x: margin,
            y: margin,
            width: non_negative(surface_width - 2.0 * margin),
            height: non_negative(surface_height - 2.0 * margin),
            corner_radius,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Corner radius that still fits a small outline
    pub fn effective_corner_radius(&self) -> f32 {
        self.corner_radius.min(self.width * 0.5).min(self.height * 0.5).max(0.0)
    }

    /// Collision walls `inset` inside the outline. An interior that would be
    /// inverted collapses onto the outline's centre line.
    pub fn interior(&self, inset: f32) -> Interior {
        let (left, right) = shrink(self.left(), self.right(), inset);
        let (top, bottom) = shrink(self.top(), self.bottom(), inset);
        Interior {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }
}

/// Axis-aligned collision walls (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interior {
    pub min: Vec2,
    pub max: Vec2,
}

impl Interior {
    /// True if a circle lies fully between the walls (with a small tolerance)
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        const EPS: f32 = 1e-3;
        pos.x - radius >= self.min.x - EPS
            && pos.x + radius <= self.max.x + EPS
            && pos.y - radius >= self.min.y - EPS
            && pos.y + radius <= self.max.y + EPS
    }
}

/// Owns the current bounds of one jar and recomputes them on resize
#[derive(Debug, Clone)]
pub struct Container {
    bounds: ContainerBounds,
    margin: f32,
    wall_inset: f32,
}

impl Container {
    pub fn new(surface_width: f32, surface_height: f32, config: &JarConfig) -> Self {
        let mut container = Self {
            bounds: ContainerBounds::from_surface(0.0, 0.0, config.margin, config.corner_radius),
            margin: config.margin,
            wall_inset: config.wall_inset,
        };
        container.resize(surface_width, surface_height);
        container
    }

    /// Recompute bounds from the surface size. The new bounds replace the old
    /// ones in a single assignment.
    pub fn resize(&mut self, surface_width: f32, surface_height: f32) {
        self.bounds = ContainerBounds::from_surface(
            surface_width,
            surface_height,
            self.margin,
            self.bounds.corner_radius,
        );
    }

    #[inline]
    pub fn bounds(&self) -> ContainerBounds {
        self.bounds
    }

    #[inline]
    pub fn wall_inset(&self) -> f32 {
        self.wall_inset
    }

    pub fn interior(&self) -> Interior {
        self.bounds.interior(self.wall_inset)
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn shrink(lo: f32, hi: f32, inset: f32) -> (f32, f32) {
    let (a, b) = (lo + inset, hi - inset);
    if a <= b {
        (a, b)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_surface() {
        let b = ContainerBounds::from_surface(400.0, 300.0, 30.0, 22.0);
        assert_eq!((b.x, b.y), (30.0, 30.0));
        assert_eq!((b.width, b.height), (340.0, 240.0));
        assert_eq!(b.right(), 370.0);
        assert_eq!(b.bottom(), 270.0);
    }

    #[test]
    fn test_small_surface_clamps_to_zero() {
        let b = ContainerBounds::from_surface(40.0, -10.0, 30.0, 22.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
        assert_eq!(b.effective_corner_radius(), 0.0);

        let b = ContainerBounds::from_surface(f32::NAN, f32::INFINITY, 30.0, 22.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
    }

    #[test]
    fn test_interior_inset() {
        let b = ContainerBounds::from_surface(400.0, 300.0, 30.0, 22.0);
        let inner = b.interior(6.0);
        assert_eq!(inner.min, Vec2::new(36.0, 36.0));
        assert_eq!(inner.max, Vec2::new(364.0, 264.0));
    }

    #[test]
    fn test_interior_collapses_instead_of_inverting() {
        let b = ContainerBounds::from_surface(68.0, 400.0, 30.0, 22.0);
        let inner = b.interior(6.0);
        assert_eq!(inner.min.x, inner.max.x);
        assert_eq!(inner.min.x, 34.0);
        assert!(inner.min.y < inner.max.y);
    }

    #[test]
    fn test_resize_replaces_bounds() {
        let config = JarConfig::default();
        let mut c = Container::new(400.0, 300.0, &config);
        c.resize(800.0, 600.0);
        assert_eq!(c.bounds().width, 740.0);
        assert_eq!(c.bounds().height, 540.0);
        assert_eq!(c.bounds().corner_radius, config.corner_radius);
    }

    #[test]
    fn test_effective_corner_radius() {
        let b = ContainerBounds::from_surface(80.0, 400.0, 30.0, 22.0);
        assert_eq!(b.effective_corner_radius(), 10.0);
    }
}
