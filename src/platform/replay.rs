//! Headless replay
//!
//! Drives one jar without a display: a seeded burst of palette-coloured votes
//! spread evenly over a fixed number of ticks. Two runs with the same options
//! produce the same final frame bit for bit.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::render::RenderFrame;
use crate::settings::JarConfig;
use crate::sim::Jar;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "vote-jar", version, about = "Seeded headless replay of a vote jar")]
pub struct ReplayOptions {
    /// JSON config file; keys it leaves out keep their defaults
    pub config_path: Option<PathBuf>,

    /// Seed for spawn positions, velocities and colours
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Votes spread evenly over the run
    #[arg(long, default_value_t = 120)]
    pub votes: usize,

    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Surface size in CSS pixels, as WxH
    #[arg(long, value_parser = parse_size, default_value = "480x720")]
    pub size: (f32, f32),

    /// Print the final frame as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            seed: 1,
            votes: 120,
            ticks: 600,
            size: (480.0, 720.0),
            json: false,
        }
    }
}

impl ReplayOptions {
    pub fn load_config(&self) -> Result<JarConfig> {
        match &self.config_path {
            Some(path) => JarConfig::load(path),
            None => Ok(JarConfig::default()),
        }
    }
}

fn parse_size(value: &str) -> std::result::Result<(f32, f32), String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got {value}"))?;
    let dim = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|_| format!("not a number: {s}"))
    };
    Ok((dim(w)?, dim(h)?))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    pub ticks: u64,
    pub spawned: usize,
    pub live: usize,
    /// Tokens that have come to rest
    pub settled: usize,
    /// Every live token lies inside the walls
    pub contained: bool,
}

/// Run the replay and return its summary and the last frame
pub fn run(config: JarConfig, opts: &ReplayOptions) -> (ReplaySummary, RenderFrame) {
    let mut jar = Jar::with_seed(config, opts.size.0, opts.size.1, opts.seed);
    let mut spawned = 0usize;
    let mut frame = jar.frame();

    for t in 0..opts.ticks {
        // Spread votes evenly: after tick t, votes * (t + 1) / ticks have arrived
        let due = (opts.votes as u128 * (t as u128 + 1) / opts.ticks as u128) as usize;
        while spawned < due {
            jar.spawn_random(Some(&format!("v{spawned}")));
            spawned += 1;
        }
        frame = jar.tick();
    }

    let walls = jar.bounds().interior(jar.wall_inset());
    let summary = ReplaySummary {
        ticks: jar.ticks(),
        spawned,
        live: jar.len(),
        settled: jar.tokens().filter(|t| t.vel.length() < 0.05).count(),
        contained: jar.tokens().all(|t| walls.contains_circle(t.pos, t.radius)),
    };
    log::info!(
        "Replay seed {}: {} ticks, {} votes, {} live, {} settled",
        opts.seed,
        summary.ticks,
        summary.spawned,
        summary.live,
        summary.settled
    );
    (summary, frame)
}
