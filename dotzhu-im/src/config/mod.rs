//! Configuration loading and defaults

pub mod settings;

pub use settings::{DisplayStyle, Settings};
