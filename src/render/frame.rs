//! The per-tick output handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::sim::{ContainerBounds, Token};

/// What the presentation layer needs to draw one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub label: String,
    pub color: String,
}

impl From<&Token> for TokenSnapshot {
    fn from(t: &Token) -> Self {
        Self {
            x: t.pos.x,
            y: t.pos.y,
            radius: t.radius,
            label: t.label.clone(),
            color: t.color.clone(),
        }
    }
}

/// Jar outline plus every live token in spawn order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub bounds: ContainerBounds,
    pub tokens: Vec<TokenSnapshot>,
}

impl RenderFrame {
    pub fn capture<'a>(bounds: ContainerBounds, tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        Self {
            bounds,
            tokens: tokens.into_iter().map(TokenSnapshot::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Receives each frame after a tick
pub trait FrameSink {
    fn present(&mut self, frame: &RenderFrame);
}

/// Collects every frame (tests, recording)
impl FrameSink for Vec<RenderFrame> {
    fn present(&mut self, frame: &RenderFrame) {
        self.push(frame.clone());
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(&RenderFrame)> FrameSink for FnSink<F> {
    fn present(&mut self, frame: &RenderFrame) {
        (self.0)(frame)
    }
}
