//! Transient "pressed" highlighting for keypad buttons
//!
//! A press is remembered until its deadline passes. The scheduler only
//! tracks button keys and times; it never sees the engine state, so an
//! expiring highlight cannot change what the calculator computes.

use std::time::{Duration, Instant};

/// Default highlight duration
pub const DEFAULT_PRESS_DURATION: Duration = Duration::from_millis(100);

/// Tracks which buttons are highlighted and until when
#[derive(Debug, Clone)]
pub struct PressFeedback<K> {
    duration: Duration,
    pressed: Vec<(K, Instant)>,
}

impl<K: PartialEq + Clone> Default for PressFeedback<K> {
    fn default() -> Self {
        Self::new(DEFAULT_PRESS_DURATION)
    }
}

impl<K: PartialEq + Clone> PressFeedback<K> {
    /// Creates a scheduler with the given highlight duration
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pressed: Vec::new(),
        }
    }

    /// Highlight duration
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Highlights `key` until `now + duration`; pressing again extends it
    pub fn press(&mut self, key: K, now: Instant) {
        let deadline = now + self.duration;
        match self.pressed.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = deadline,
            None => self.pressed.push((key, deadline)),
        }
    }

    /// Whether `key` is currently highlighted
    #[must_use]
    pub fn is_pressed(&self, key: &K) -> bool {
        self.pressed.iter().any(|(k, _)| k == key)
    }

    /// Removes and returns every key whose deadline is at or before `now`
    pub fn expire(&mut self, now: Instant) -> Vec<K> {
        let mut released = Vec::new();
        self.pressed.retain(|(key, deadline)| {
            if *deadline <= now {
                released.push(key.clone());
                false
            } else {
                true
            }
        });
        released
    }

    /// Earliest pending deadline, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pressed.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Currently highlighted keys, oldest press first
    pub fn pressed(&self) -> impl Iterator<Item = &K> {
        self.pressed.iter().map(|(key, _)| key)
    }

    /// Drops every highlight without reporting it
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
