//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions, in window-pixel
//! coordinates. The pieces are deliberately layered:
//!
//! - [`layout`] - pure geometry: where buttons go for a given window size
//! - [`button`] - one labeled, clickable rectangle and its skin
//! - [`stage`] - the container that owns widgets and routes pointer input
//!
//! Layout is kept free of rendering types so it can be unit-tested without
//! an SDL context; the stage and buttons only touch the canvas inside
//! `render`.

pub mod button;
pub mod layout;
pub mod stage;

pub use button::{Button, ButtonSkin, ButtonState, ButtonStyle};
pub use layout::{font_scale, menu_layout, ButtonGeometry};
pub use stage::Stage;
