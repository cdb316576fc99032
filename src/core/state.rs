//! # Application State
//!
//! Core state for the landing page. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Navigator        // services card stack
//! ├── catalog: ServiceCatalog     // full copy for the detail view
//! ├── detail: Option<String>      // service shown in the detail overlay
//! ├── intro: IntroTimeline        // click-reveal intro
//! ├── hero: HeroRotator           // rotating hero headline
//! └── status_message: String      // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::hero::HeroRotator;
use crate::core::intro::IntroTimeline;
use crate::core::layout::LayoutMode;
use crate::core::navigator::Navigator;
use crate::core::services::{Service, ServiceCatalog};

pub struct App {
    pub navigator: Navigator,
    pub catalog: ServiceCatalog,
    /// Service id shown in the detail overlay. Independent of the
    /// navigator's expanded card: closing the overlay leaves the card expanded.
    pub detail: Option<String>,
    pub intro: IntroTimeline,
    pub hero: HeroRotator,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: ServiceCatalog, default_layout: LayoutMode) -> Self {
        Self {
            navigator: Navigator::new(catalog.cards(), default_layout),
            catalog,
            detail: None,
            intro: IntroTimeline::new(),
            hero: HeroRotator::default(),
            status_message: String::from("Swipe through our services or switch views"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.catalog.clone(), config.default_layout);
        app.navigator = app.navigator.with_interpreter(config.gesture);
        app.hero = HeroRotator::new(Duration::from_millis(config.hero_interval_ms));
        if config.skip_intro {
            app.intro.skip();
        }
        app
    }

    pub fn detail_service(&self) -> Option<&Service> {
        self.detail.as_deref().and_then(|id| self.catalog.get(id))
    }
}
