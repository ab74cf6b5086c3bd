//! Presentation data for the comparison widget
//!
//! The widget page owns the DOM; this module only produces the view models it
//! renders and the resize messages it relays to its parent frame.

pub mod resize;
pub mod views;

pub use resize::{ResizeMessage, ResizeTracker};
pub use views::{render_all, render_matched, ComparisonView, PlanView, PlatformView};
