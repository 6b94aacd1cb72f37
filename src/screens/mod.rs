//! Screens
//!
//! Full-window views driven by the application shell through the
//! [`crate::screen::Screen`] lifecycle. The title menu is the only screen
//! implemented; the menu entries it offers are the seams where future
//! screens attach.

pub mod title;

pub use title::TitleScreen;
