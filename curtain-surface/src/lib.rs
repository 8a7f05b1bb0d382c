//! Visibility controller for a modal dialog, a slide-in nav drawer and the
//! backdrop they share.
//!
//! The crate is UI-agnostic and split into three layers:
//! - state: [`PanelPhase`] per surface, collected into a [`UiPanelState`]
//!   snapshot owned by a [`PanelController`];
//! - presentation: [`present`] maps a phase and a [`TransitionMode`] to the
//!   [`Presentation`] a surface renders with (`open` class and inline
//!   `display`);
//! - timers: transitions are completed by tickets handed to a
//!   [`TransitionTimers`] implementation, so hosts decide how delays run.
//!
//! Front-ends usually:
//! 1. Describe which elements the page has with [`PageElements`] and build
//!    the controller with [`PanelController::new`].
//! 2. Feed click [`Trigger`]s into [`PanelController::handle`], passing a
//!    timer host ([`TimerRequests`] to collect requests, or
//!    [`VirtualTimers`] for deterministic virtual time).
//! 3. Report fired timers back through [`PanelController::timer_elapsed`].
//! 4. Render each [`SurfaceKind`] from [`PanelController::presentation`].
//!
//! # Quick Example
//!
//! ```
//! use std::time::Duration;
//!
//! use curtain_surface::{
//!     PageElements, PanelController, PanelPhase, SurfaceKind,
//!     TransitionConfig, Trigger, VirtualTimers,
//! };
//!
//! let mut controller =
//!     PanelController::new(PageElements::all(), TransitionConfig::default())
//!         .expect("page has every required element");
//! let mut timers = VirtualTimers::new();
//!
//! controller.handle(Trigger::PlanSelected { plan: 0 }, &mut timers);
//! assert_eq!(controller.phase(SurfaceKind::Modal), PanelPhase::Opening);
//!
//! timers.advance(Duration::from_millis(10), &mut controller);
//! assert_eq!(controller.phase(SurfaceKind::Modal), PanelPhase::Open);
//! assert_eq!(controller.phase(SurfaceKind::Backdrop), PanelPhase::Open);
//! ```

mod config;
mod controller;
mod error;
mod phase;
mod presentation;
mod state;
mod surface;
mod timer;
mod trigger;
mod virtual_time;

pub use config::{
    DEFAULT_HIDE_DELAY, DEFAULT_REVEAL_DELAY, TransitionConfig, TransitionMode,
};
pub use controller::PanelController;
pub use error::{PanelError, Result};
pub use phase::PanelPhase;
pub use presentation::{Display, OPEN_CLASS, Presentation, present};
pub use state::UiPanelState;
pub use surface::{PageElements, SurfaceKind};
pub use timer::{
    ScheduledTimer, TimerKind, TimerRequest, TimerRequests, TimerTicket,
    TransitionTimers,
};
pub use trigger::Trigger;
pub use virtual_time::VirtualTimers;
