//! Finger-painting canvas for kids.
//!
//! The core is [`input::DrawingSurface`]: it turns pointer gestures into
//! strokes, keeps an undo stack and renders the composite with cairo. Around
//! it sit the export pipeline (PNG into a private cache directory, then an
//! optional share action), background photos, configuration and a
//! toolkit-free host ([`app::App`]) driven by gesture scripts.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod notification;
pub mod script;

pub use app::App;
pub use config::Config;
