//! # TUI Components
//!
//! All UI pieces of the landing page.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Hero`: rotating headline
//! - `Intro`: full-screen click-reveal
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose state outlives a frame, usually hit rects for the mouse:
//! - `CardStack`: the cards themselves, focus and drag offset
//! - `LayoutSwitcher`: stack / grid / list buttons
//! - `Pagination`: dots under the stack
//! - `Navbar`: brand, links and click ripples
//! - `ServiceDetail`: overlay for the activated service
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never the whole `App`. The
//! card stack only sees the render model, the pagination only sees dots.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Pagination::new(&mut tui.pagination, &dots).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! Pagination::new(app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── card_stack.rs       (cards in stack, grid or list)
//! ├── layout_switcher.rs  (view toggle)
//! ├── pagination.rs       (dots)
//! ├── navbar.rs           (top bar with ripples)
//! ├── hero.rs             (headline)
//! ├── intro.rs            (click-reveal)
//! └── service_detail.rs   (detail overlay)
//! ```

pub mod card_stack;
pub mod hero;
pub mod intro;
pub mod layout_switcher;
pub mod navbar;
pub mod pagination;
pub mod service_detail;

pub use card_stack::{CardStack, CardStackState};
pub use hero::Hero;
pub use intro::Intro;
pub use layout_switcher::{LayoutSwitcher, LayoutSwitcherState};
pub use navbar::{Navbar, NavbarState};
pub use pagination::{Pagination, PaginationState};
pub use service_detail::{DetailEvent, ServiceDetail, ServiceDetailState};
