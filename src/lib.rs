//! Toast and modal alert overlays for Ratatui applications.
//!
//! A host owns one [`TopLevel`], calls [`TopLevel::show`] and
//! [`TopLevel::show_alert`] from anywhere in its update code, calls
//! [`TopLevel::tick`] once per pass of its event loop, and renders its own
//! content through [`attach_overlay`].
//!
//! ```no_run
//! use ratatui::widgets::Paragraph;
//! use toplevel::{attach_overlay, OverlayState, TopLevel};
//!
//! let mut top_level = TopLevel::new();
//! let mut overlay_state = OverlayState::new();
//! top_level.show("checkmark", "Saved", None);
//!
//! let mut terminal = ratatui::init();
//! terminal
//!     .draw(|frame| {
//!         let overlay = attach_overlay(Paragraph::new("content"), &top_level);
//!         frame.render_stateful_widget(overlay, frame.area(), &mut overlay_state);
//!     })
//!     .ok();
//! ratatui::restore();
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod overlay;
pub mod state;
pub mod timer;
pub mod transition;

pub use config::{ToastConfig, ToastPosition};
pub use controller::TopLevel;
pub use overlay::{attach_overlay, Overlay, OverlayState, SafeArea};
pub use state::{AlertState, ToastState};
