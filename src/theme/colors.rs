//! Colors - Palette Lookup Tables

use gpui::{rgb, Rgba};
use serde::{Deserialize, Serialize};

/// Named color a component is tinted with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
    Teal,
    Violet,
    Pink,
    Gray,
    Dark,
}

impl Palette {
    /// Every palette entry, in display order
    pub const ALL: [Palette; 10] = [
        Palette::Blue,
        Palette::Red,
        Palette::Green,
        Palette::Yellow,
        Palette::Orange,
        Palette::Teal,
        Palette::Violet,
        Palette::Pink,
        Palette::Gray,
        Palette::Dark,
    ];

    /// Lightest tint, used for light variants and hover backgrounds
    pub fn light(&self) -> Rgba {
        rgb(match self {
            Palette::Blue => 0xdbeafe,
            Palette::Red => 0xfee2e2,
            Palette::Green => 0xdcfce7,
            Palette::Yellow => 0xfef9c3,
            Palette::Orange => 0xffedd5,
            Palette::Teal => 0xccfbf1,
            Palette::Violet => 0xede9fe,
            Palette::Pink => 0xfce7f3,
            Palette::Gray => 0xf3f4f6,
            Palette::Dark => 0xe5e7eb,
        })
    }

    /// Main fill color
    pub fn filled(&self) -> Rgba {
        rgb(match self {
            Palette::Blue => 0x3b82f6,
            Palette::Red => 0xef4444,
            Palette::Green => 0x22c55e,
            Palette::Yellow => 0xeab308,
            Palette::Orange => 0xf97316,
            Palette::Teal => 0x14b8a6,
            Palette::Violet => 0x8b5cf6,
            Palette::Pink => 0xec4899,
            Palette::Gray => 0x6b7280,
            Palette::Dark => 0x333333,
        })
    }

    /// Fill color while hovered
    pub fn hover(&self) -> Rgba {
        rgb(match self {
            Palette::Blue => 0x2563eb,
            Palette::Red => 0xdc2626,
            Palette::Green => 0x16a34a,
            Palette::Yellow => 0xca8a04,
            Palette::Orange => 0xea580c,
            Palette::Teal => 0x0d9488,
            Palette::Violet => 0x7c3aed,
            Palette::Pink => 0xdb2777,
            Palette::Gray => 0x4b5563,
            Palette::Dark => 0x1f1f1f,
        })
    }

    /// Text drawn on top of [`Palette::filled`]
    pub fn on_filled(&self) -> Rgba {
        match self {
            Palette::Yellow => rgb(0x1f2937),
            _ => rgb(0xffffff),
        }
    }
}

/// Neutral colors shared by every component
pub struct LoomColors;

impl LoomColors {
    // Background colors
    /// Gallery background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Surface of cards, modals and inputs
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Filled input variant background
    pub fn surface_muted() -> Rgba { rgb(0xf3f4f6) }
    /// Modal backdrop
    pub fn overlay() -> Rgba { gpui::rgba(0x00000088) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text (descriptions)
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text (placeholders, disabled)
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Error text and borders
    pub fn error() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Interaction
    /// Hover background of neutral controls
    pub fn hover() -> Rgba { rgb(0xf3f4f6) }
    /// Unfilled track of progress bars and switches
    pub fn track() -> Rgba { rgb(0xe5e7eb) }
    /// Empty rating symbols
    pub fn symbol_empty() -> Rgba { rgb(0xd1d5db) }

    /// Transparent
    pub fn transparent() -> Rgba { gpui::rgba(0x00000000) }
}

/// Convert a parsed hex color into a GPUI color
pub fn hex_to_rgba(color: crate::domain::color::HexColor) -> Rgba {
    gpui::rgba(color.to_rgba_u32())
}
