//! Core IME functionality
//!
//! This module contains the braille input session and key event handling.

pub mod backend;
pub mod keycode;
pub mod session;
