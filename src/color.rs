//! RGBA colors carried by entities
//!
//! The simulation only stores colors; the renderer decides how to use them.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const RED: Color = Color::rgba(230, 41, 55, 255);
    pub const DARKGREEN: Color = Color::rgba(0, 117, 44, 255);
    pub const BLUE: Color = Color::rgba(0, 121, 241, 255);
    pub const VIOLET: Color = Color::rgba(135, 60, 190, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
}
