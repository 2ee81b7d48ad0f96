//! Tokens and the capacity-bounded population

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::POPULATION_CAP;

/// One vote, drawn as a labelled disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Spawn sequence number within its jar
    pub id: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
    pub label: String,
    pub color: String,
}

impl Token {
    pub fn new(id: u64, pos: Vec2, vel: Vec2, radius: f32, label: String, color: String) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            label,
            color,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// Live tokens in spawn order, never longer than `cap`
#[derive(Debug, Clone)]
pub struct Population {
    tokens: VecDeque<Token>,
    cap: usize,
}

impl Population {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            tokens: VecDeque::with_capacity(cap.min(POPULATION_CAP) + 1),
            cap,
        }
    }

    /// Append a token, evicting the single oldest one if the cap is exceeded
    pub fn push(&mut self, token: Token) -> Option<Token> {
        self.tokens.push_back(token);
        if self.tokens.len() > self.cap {
            self.tokens.pop_front()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Drop tokens failing the predicate, keeping order
    pub fn retain(&mut self, f: impl FnMut(&Token) -> bool) {
        self.tokens.retain(f);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// All tokens as one slice in spawn order
    pub fn as_mut_slice(&mut self) -> &mut [Token] {
        self.tokens.make_contiguous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: u64) -> Token {
        Token::new(id, Vec2::ZERO, Vec2::ZERO, 34.0, format!("t{id}"), "#fff".into())
    }

    #[test]
    fn test_push_under_cap_keeps_everything() {
        let mut pop = Population::new(3);
        assert!(pop.push(token(0)).is_none());
        assert!(pop.push(token(1)).is_none());
        assert!(pop.push(token(2)).is_none());
        assert_eq!(pop.len(), 3);
    }

    #[test]
    fn test_push_over_cap_evicts_oldest() {
        let mut pop = Population::new(2);
        pop.push(token(0));
        pop.push(token(1));
        let evicted = pop.push(token(2)).map(|t| t.id);
        assert_eq!(evicted, Some(0));
        let ids: Vec<u64> = pop.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_slice_is_in_spawn_order_after_wrap() {
        let mut pop = Population::new(3);
        for id in 0..7 {
            pop.push(token(id));
        }
        let ids: Vec<u64> = pop.as_mut_slice().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn test_zero_cap_is_raised_to_one() {
        let mut pop = Population::new(0);
        pop.push(token(0));
        pop.push(token(1));
        assert_eq!(pop.len(), 1);
        assert_eq!(pop.cap(), 1);
    }

    #[test]
    fn test_huge_cap_does_not_preallocate() {
        let mut pop = Population::new(usize::MAX);
        assert_eq!(pop.cap(), usize::MAX);
        assert!(pop.push(token(0)).is_none());
        assert_eq!(pop.len(), 1);
    }

    #[test]
    fn test_non_finite_token() {
        let mut t = token(0);
        assert!(t.is_finite());
        t.vel.y = f32::NAN;
        assert!(!t.is_finite());
    }
}
