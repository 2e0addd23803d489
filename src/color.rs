// src/color.rs

//! Named ANSI colors and the SGR sequences used to paint grid symbols.

use serde::{Deserialize, Serialize};

pub const SGR_PREFIX: &str = "\x1b[";
pub const SGR_SUFFIX: char = 'm';
pub const SGR_SEPARATOR: char = ';';
/// `ESC[0m`: clears all attributes back to the terminal default.
pub const SGR_RESET: &str = "\x1b[0m";

const SGR_FG_BASE: u8 = 30;
const SGR_BG_BASE: u8 = 40;

/// The eight standard ANSI colors (SGR indices 0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl NamedColor {
    pub fn fg_code(self) -> u8 {
        SGR_FG_BASE + self as u8
    }

    pub fn bg_code(self) -> u8 {
        SGR_BG_BASE + self as u8
    }

    /// SGR sequence painting both foreground and background in this color,
    /// e.g. `ESC[31;41m` for red. A glyph drawn this way shows up as a
    /// solid block of color.
    pub fn solid_sgr(self) -> String {
        format!(
            "{}{}{}{}{}",
            SGR_PREFIX,
            self.fg_code(),
            SGR_SEPARATOR,
            self.bg_code(),
            SGR_SUFFIX
        )
    }
}
