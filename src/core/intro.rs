//! # Intro Timeline
//!
//! The click-reveal intro is a fixed sequence of stages keyed off elapsed
//! time. The timeline only answers "which stage are we in"; drawing each
//! stage is the TUI's job.
//!
//! ```text
//!   0ms   300    1000    1800   2400   2900     3700   4500        7500
//!   |Blank|Button|Cursor |Aim   |Click |Expand  |Grid  |Text ...   |done
//! ```

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroStage {
    Blank,
    /// "Your Business" button fades in.
    Button,
    /// Pointer appears off to the side.
    Cursor,
    /// Pointer glides onto the button.
    Aim,
    /// Button is pressed, ripples spread.
    Click,
    /// A dot grows out of the click point.
    Expansion,
    /// Grid lines sweep across the screen.
    Grid,
    /// "CLICK STUDIO" slides in.
    Text,
    Complete,
}

/// Stage start offsets in milliseconds.
const STAGES: [(u64, IntroStage); 8] = [
    (300, IntroStage::Button),
    (1000, IntroStage::Cursor),
    (1800, IntroStage::Aim),
    (2400, IntroStage::Click),
    (2900, IntroStage::Expansion),
    (3700, IntroStage::Grid),
    (4500, IntroStage::Text),
    (7500, IntroStage::Complete),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntroTimeline {
    skipped: bool,
}

impl IntroTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(&mut self) {
        self.skipped = true;
    }

    pub fn stage_at(&self, elapsed: Duration) -> IntroStage {
        if self.skipped {
            return IntroStage::Complete;
        }
        let ms = elapsed.as_millis() as u64;
        STAGES
            .iter()
            .rev()
            .find(|(start, _)| ms >= *start)
            .map(|(_, stage)| *stage)
            .unwrap_or(IntroStage::Blank)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.stage_at(elapsed) == IntroStage::Complete
    }

    /// Time spent inside the current stage, as a 0.0..=1.0 fraction of its
    /// length. Used to ease stage animations.
    pub fn stage_progress(&self, elapsed: Duration) -> f32 {
        let ms = elapsed.as_millis() as u64;
        let mut start = 0;
        for (next, _) in STAGES {
            if ms < next {
                return (ms - start) as f32 / (next - start) as f32;
            }
            start = next;
        }
        1.0
    }

    pub fn total() -> Duration {
        Duration::from_millis(STAGES[STAGES.len() - 1].0)
    }
}
