//! A row of jars, one per ballot option
//!
//! Broadcast votes are routed to the jar of their option; a broadcast reset
//! clears every jar. Each jar gets its own PCG stream of the shelf seed, so
//! the jars stay independent and a seeded shelf replays exactly.

use rand_pcg::Pcg32;

use crate::events::VoteEvent;
use crate::render::RenderFrame;
use crate::settings::JarConfig;
use crate::sim::Jar;

pub struct Shelf {
    config: JarConfig,
    seed: u64,
    /// Kept in the order options were added
    jars: Vec<(String, Jar)>,
}

impl Shelf {
    pub fn new(config: JarConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            jars: Vec::new(),
        }
    }

    /// Add a jar for `option_id`, or resize the existing one
    pub fn add_jar(&mut self, option_id: &str, surface_width: f32, surface_height: f32) -> &mut Jar {
        if let Some(i) = self.index_of(option_id) {
            let jar = &mut self.jars[i].1;
            jar.resize(surface_width, surface_height);
            return jar;
        }

        let stream = self.jars.len() as u64;
        let rng = Pcg32::new(self.seed, stream);
        let jar = Jar::new(self.config.clone(), surface_width, surface_height, rng);
        log::info!("Added jar for option {} ({}x{})", option_id, surface_width, surface_height);
        self.jars.push((option_id.to_string(), jar));
        let last = self.jars.len() - 1;
        &mut self.jars[last].1
    }

    pub fn jar(&self, option_id: &str) -> Option<&Jar> {
        self.index_of(option_id).map(|i| &self.jars[i].1)
    }

    pub fn jar_mut(&mut self, option_id: &str) -> Option<&mut Jar> {
        self.index_of(option_id).map(|i| &mut self.jars[i].1)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.jars.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.jars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jars.is_empty()
    }

    /// Drop a token into the vote's jar. Votes for unknown options are ignored.
    /// Without an explicit colour the token takes a palette colour.
    pub fn on_vote(&mut self, vote: &VoteEvent) -> bool {
        let Some(i) = self.index_of(&vote.option_id) else {
            log::debug!("Ignoring vote for unknown option {}", vote.option_id);
            return false;
        };
        let jar = &mut self.jars[i].1;
        let label = vote.token_label();
        match vote.color.as_deref() {
            Some(color) => jar.spawn(label, Some(color)),
            None => jar.spawn_random(label),
        };
        true
    }

    pub fn on_resize(&mut self, option_id: &str, surface_width: f32, surface_height: f32) -> bool {
        match self.jar_mut(option_id) {
            Some(jar) => {
                jar.resize(surface_width, surface_height);
                true
            }
            None => false,
        }
    }

    /// Clear every jar
    pub fn on_reset(&mut self) {
        for (_, jar) in &mut self.jars {
            jar.clear();
        }
        log::info!("Reset {} jars", self.jars.len());
    }

    /// Tick every jar once, in option order
    pub fn tick_all(&mut self) -> Vec<(String, RenderFrame)> {
        self.jars
            .iter_mut()
            .map(|(id, jar)| (id.clone(), jar.tick()))
            .collect()
    }

    fn index_of(&self, option_id: &str) -> Option<usize> {
        self.jars.iter().position(|(id, _)| id == option_id)
    }
}
