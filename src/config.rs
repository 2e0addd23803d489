// src/config.rs

//! Display configuration for the grid picture.
//!
//! The configuration is a plain value: built once (defaults, optionally a
//! JSON file, then command-line flags on top) and handed to the
//! [`Renderer`](crate::renderer::Renderer). Nothing reads it from global
//! state.

use crate::color::NamedColor;
use crate::renderer::Symbol;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit every symbol twice so unit cells look square in a terminal.
    pub duplicate_width: bool,
    /// Wrap every symbol in an SGR color sequence.
    pub use_color: bool,
    /// Glyph and color for each display symbol.
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            duplicate_width: true,
            use_color: true,
            palette: Palette::default(),
        }
    }
}

impl DisplayConfig {
    /// Reads a JSON configuration file. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: DisplayConfig = serde_json::from_str(&text)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        debug!("Loaded display config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// How one symbol is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolStyle {
    pub glyph: char,
    /// Painted as both foreground and background when colors are on.
    pub color: NamedColor,
}

impl SymbolStyle {
    pub const fn new(glyph: char, color: NamedColor) -> Self {
        SymbolStyle { glyph, color }
    }
}

/// Symbol table: one style per display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub empty: SymbolStyle,
    pub pin: SymbolStyle,
    pub via: SymbolStyle,
    pub metal2: SymbolStyle,
    pub metal3: SymbolStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            empty: SymbolStyle::new('0', NamedColor::White),
            pin: SymbolStyle::new('p', NamedColor::Red),
            via: SymbolStyle::new('v', NamedColor::Blue),
            metal2: SymbolStyle::new('2', NamedColor::Black),
            metal3: SymbolStyle::new('3', NamedColor::Black),
        }
    }
}

impl Palette {
    pub fn style(&self, symbol: Symbol) -> SymbolStyle {
        match symbol {
            Symbol::Empty => self.empty,
            Symbol::Pin => self.pin,
            Symbol::Via => self.via,
            Symbol::Metal2 => self.metal2,
            Symbol::Metal3 => self.metal3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_picture() {
        let config = DisplayConfig::default();
        assert!(config.duplicate_width);
        assert!(config.use_color);
        assert_eq!(config.palette.style(Symbol::Pin).glyph, 'p');
        assert_eq!(config.palette.style(Symbol::Empty).color, NamedColor::White);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: DisplayConfig = serde_json::from_str(
            r#"{ "use_color": false, "palette": { "via": { "glyph": "x", "color": "green" } } }"#,
        )
        .unwrap();
        assert!(config.duplicate_width);
        assert!(!config.use_color);
        assert_eq!(config.palette.via, SymbolStyle::new('x', NamedColor::Green));
        assert_eq!(config.palette.pin, Palette::default().pin);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DisplayConfig::load(Path::new("/nonexistent/netgrid.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read config"));
    }
}
