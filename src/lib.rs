//! Decision logic for decorated window frames.
//!
//! - [`window`]: border insets, title-bar button layout, pointer hit testing
//!   and a terminal frame painter built on the same geometry.
//! - [`popup`]: the single tooltip popup with its placement and dismissal
//!   rules.
//! - [`event_loop`], [`drivers`], [`ui`]: the terminal plumbing used by the
//!   demo binary.

pub mod config;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod popup;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::{Config, ConfigError, DecorationConfig, PopupConfig};
