//! Inbound events
//!
//! A jar only ever receives four things from the outside: a vote (spawn one
//! token), a surface resize, a reset, and the display tick itself. Votes arrive
//! from the voting server's broadcast as `VoteEvent`s.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Event addressed to a single jar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JarEvent {
    Vote {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    Resize {
        width: f32,
        height: f32,
    },
    Reset,
}

/// Broadcast payload sent for every accepted vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEvent {
    /// Ballot option the vote was cast for; selects the jar
    pub option_id: String,
    /// Display label of the option
    #[serde(default)]
    pub label: Option<String>,
    /// Voter name
    #[serde(default)]
    pub name: Option<String>,
    /// Running tally for the option
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub color: Option<String>,
}

impl VoteEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Text shown on the token: the voter's name, else the option label
    pub fn token_label(&self) -> Option<&str> {
        [self.name.as_deref(), self.label.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    /// The jar-level event this vote turns into
    pub fn to_jar_event(&self) -> JarEvent {
        JarEvent::Vote {
            label: self.token_label().map(str::to_string),
            color: self.color.clone(),
        }
    }
}
