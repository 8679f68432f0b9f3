//! UI components built with Leptos.
//!
//! - [`FilterBar`] - Category toggle buttons
//! - [`Masthead`] - Animated logo and contact links
//! - [`Gallery`] - Feed-driven list of portfolio entries
//! - [`carousel`] - Looping slideshow for multi-asset entries
//! - [`video`] - Visibility-driven auto-playing video
//! - [`Footer`] - Logo and copyright
//! - [`accent`] - Per-category accent colors
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod accent;
pub mod carousel;
pub mod filter_bar;
pub mod footer;
pub mod gallery;
pub mod icons;
pub mod masthead;
pub mod video;

pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use gallery::Gallery;
pub use masthead::Masthead;
