//! One jar instance: container, population, spawner and tick
//!
//! A `Jar` owns all of its state, including its random source, so any number
//! of jars can run side by side without sharing anything. All operations are
//! synchronous; events applied between two ticks take effect on the next one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::container::{Container, ContainerBounds};
use super::palette::Palette;
use super::tick::{self, Physics, TickStats};
use super::token::{Population, Token};
use crate::events::JarEvent;
use crate::render::{FrameSink, RenderFrame};
use crate::settings::JarConfig;

pub struct Jar<R = Pcg32> {
    config: JarConfig,
    physics: Physics,
    container: Container,
    population: Population,
    palette: Palette,
    rng: R,
    next_id: u64,
    ticks: u64,
    last_stats: TickStats,
}

impl Jar<Pcg32> {
    /// Jar with a PCG random source seeded from `seed`
    pub fn with_seed(config: JarConfig, surface_width: f32, surface_height: f32, seed: u64) -> Self {
        Self::new(config, surface_width, surface_height, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Jar<R> {
    /// Create a jar sized for the current surface. `rng` drives spawn position,
    /// initial velocity and palette picks.
    pub fn new(config: JarConfig, surface_width: f32, surface_height: f32, rng: R) -> Self {
        let container = Container::new(surface_width, surface_height, &config);
        Self {
            physics: Physics::from_config(&config),
            population: Population::new(config.population_cap),
            palette: Palette::from_config(&config),
            container,
            config,
            rng,
            next_id: 0,
            ticks: 0,
            last_stats: TickStats::default(),
        }
    }

    /// Recompute bounds; applies to the next tick's wall pass
    pub fn resize(&mut self, surface_width: f32, surface_height: f32) {
        self.container.resize(surface_width, surface_height);
        let b = self.container.bounds();
        log::debug!("Jar resized to {}x{} (outline {}x{})", surface_width, surface_height, b.width, b.height);
    }

    /// Drop a new token just inside the top of the jar. Absent or empty labels
    /// and colours fall back to the configured defaults. Returns the token id.
    pub fn spawn(&mut self, label: Option<&str>, color: Option<&str>) -> u64 {
        let label = non_empty_or(label, &self.config.default_label);
        let color = non_empty_or(color, &self.config.default_color);
        self.insert(label, color)
    }

    /// Like `spawn`, with the colour drawn from the palette
    pub fn spawn_random(&mut self, label: Option<&str>) -> u64 {
        let color = self
            .palette
            .pick(&mut self.rng)
            .unwrap_or(self.config.default_color.as_str())
            .to_string();
        let label = non_empty_or(label, &self.config.default_label);
        self.insert(label, color)
    }

    fn insert(&mut self, label: String, color: String) -> u64 {
        let bounds = self.container.bounds();
        let radius = self.config.token_radius;

        let lo = bounds.left() + self.config.spawn_inset_x;
        let span = bounds.right() - self.config.spawn_inset_x - lo;
        let x = if span > 0.0 && span.is_finite() {
            lo + self.rng.random::<f32>() * span
        } else {
            bounds.center().x
        };
        let y = bounds.top() + self.config.spawn_drop_y + radius;

        // Unvalidated configs may carry a non-finite speed
        let max_vx = self.config.spawn_max_vx;
        let vx = if max_vx > 0.0 && max_vx.is_finite() {
            (self.rng.random::<f32>() * 2.0 - 1.0) * max_vx
        } else {
            0.0
        };

        let id = self.next_id;
        self.next_id += 1;
        let token = Token::new(id, Vec2::new(x, y), Vec2::new(vx, 0.0), radius, label, color);
        if let Some(evicted) = self.population.push(token) {
            log::debug!("Population cap {} reached, evicted token {}", self.population.cap(), evicted.id);
        }
        id
    }

    /// Remove every token; the next frame shows an empty jar
    pub fn clear(&mut self) {
        if !self.population.is_empty() {
            log::debug!("Cleared {} tokens", self.population.len());
        }
        self.population.clear();
    }

    /// Apply one inbound event
    pub fn handle(&mut self, event: JarEvent) {
        match event {
            JarEvent::Vote { label, color } => {
                self.spawn(label.as_deref(), color.as_deref());
            }
            JarEvent::Resize { width, height } => self.resize(width, height),
            JarEvent::Reset => self.clear(),
        }
    }

    /// Advance one frame and return what to draw
    pub fn tick(&mut self) -> RenderFrame {
        let walls = self.container.interior();
        self.last_stats = tick::tick(self.population.as_mut_slice(), &walls, &self.physics);

        let before = self.population.len();
        self.population.retain(Token::is_finite);
        let dropped = before - self.population.len();
        if dropped > 0 {
            log::warn!("Dropped {} tokens with non-finite state", dropped);
        }

        self.ticks += 1;
        self.frame()
    }

    /// Tick, then hand the frame to `sink`
    pub fn step<S: FrameSink + ?Sized>(&mut self, sink: &mut S) {
        let frame = self.tick();
        sink.present(&frame);
    }

    /// Snapshot of the current state without advancing
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::capture(self.container.bounds(), self.population.iter())
    }
}

impl<R> Jar<R> {
    pub fn bounds(&self) -> ContainerBounds {
        self.container.bounds()
    }

    pub fn wall_inset(&self) -> f32 {
        self.container.wall_inset()
    }

    /// Live tokens, oldest first
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.population.iter()
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    pub fn config(&self) -> &JarConfig {
        &self.config
    }

    /// Ticks run since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Direct access for tests and tools that place tokens by hand
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
