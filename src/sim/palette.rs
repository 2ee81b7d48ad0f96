//! Random token colours

use rand::Rng;

use crate::settings::{DEFAULT_PALETTE, JarConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    pub fn from_config(config: &JarConfig) -> Self {
        Self::new(config.palette.clone())
    }

    /// Uniformly chosen colour, or `None` for an empty palette
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.colors.len());
        Some(self.colors[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
