//! Run/stop bookkeeping for a display-driven tick loop
//!
//! Each `start()` opens a new generation. A scheduled frame callback carries
//! the generation it was scheduled under and only ticks while that generation
//! is still current, so a restart never leaves an older chain running.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    running: bool,
    generation: u64,
}

impl FrameLoop {
    /// Begin a new generation. Returns `None` if already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.generation += 1;
        Some(self.generation)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a callback scheduled under `generation` should tick and reschedule
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut l = FrameLoop::default();
        assert_eq!(l.start(), Some(1));
        assert_eq!(l.start(), None);
        assert!(l.is_current(1));
    }

    #[test]
    fn test_restart_retires_pending_chain() {
        let mut l = FrameLoop::default();
        let first = l.start().unwrap();
        l.stop();
        assert!(!l.is_current(first));
        let second = l.start().unwrap();
        // The callback still queued from the first start must not reschedule
        assert!(!l.is_current(first));
        assert!(l.is_current(second));
    }

    #[test]
    fn test_stopped_loop_has_no_current_generation() {
        let mut l = FrameLoop::default();
        assert!(!l.is_current(0));
        let g = l.start().unwrap();
        l.stop();
        assert!(!l.is_running());
        assert!(!l.is_current(g));
    }
}
