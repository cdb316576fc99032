//! # Hero Headline
//!
//! "We don't just <word>. We build businesses." with the word rotating on a
//! fixed interval.

use std::time::Duration;

pub const DEFAULT_HERO_INTERVAL_MS: u64 = 3000;

pub const HERO_WORDS: [&str; 5] = [
    "build websites",
    "launch stores",
    "manage socials",
    "create content",
    "list on Takealot",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRotator {
    interval: Duration,
}

impl Default for HeroRotator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_HERO_INTERVAL_MS))
    }
}

impl HeroRotator {
    /// A zero interval is bumped to 1ms so the index stays defined.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn index_at(&self, elapsed: Duration) -> usize {
        let ticks = elapsed.as_millis() / self.interval.as_millis();
        (ticks % HERO_WORDS.len() as u128) as usize
    }

    pub fn word_at(&self, elapsed: Duration) -> &'static str {
        HERO_WORDS[self.index_at(elapsed)]
    }
}
