//! Color - Hex Colors, HSL Conversion and Picker Drag State

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque sRGB color written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::new(0xff, 0xff, 0xff);
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional, digits are case-insensitive)
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let invalid = || Error::Color {
            input: input.to_string(),
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = v * 16 + v;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Build from hue in degrees, saturation and lightness in percent
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 100.0);
        let l = lightness.clamp(0.0, 100.0) / 100.0;
        let a = s * l.min(1.0 - l) / 100.0;

        let channel = |n: f32| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * value).round().clamp(0.0, 255.0) as u8
        };

        Self::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// Pack into `0xRRGGBBAA` with full opacity
    pub fn to_rgba_u32(&self) -> u32 {
        (u32::from(self.r) << 24) | (u32::from(self.g) << 16) | (u32::from(self.b) << 8) | 0xff
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Format HSL components as `#rrggbb`
pub fn hsl_to_hex(hue: f32, saturation: f32, lightness: f32) -> String {
    HexColor::from_hsl(hue, saturation, lightness).to_string()
}

/// Color under a point of the picker area.
///
/// `x` and `y` are fractions of the area size; the horizontal axis is hue,
/// the vertical axis saturation, at a fixed lightness of 50%.
pub fn color_at(x: f32, y: f32) -> HexColor {
    let x = x.clamp(0.0, 1.0);
    let y = y.clamp(0.0, 1.0);
    HexColor::from_hsl(x * 360.0, y * 100.0, 50.0)
}

/// Thumb position for `color` as fractions of the picker area
pub fn thumb_position(color: HexColor) -> (f32, f32) {
    let x = f32::from(color.r) / 255.0;
    let y = 1.0 - f32::from(color.g) / 255.0;
    (x, y)
}

/// Drag tracking for the picker area
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerDrag {
    color: HexColor,
    dragging: bool,
    disabled: bool,
}

impl PickerDrag {
    pub fn new(color: HexColor) -> Self {
        Self {
            color,
            dragging: false,
            disabled: false,
        }
    }

    /// Get the selected color
    pub fn color(&self) -> HexColor {
        self.color
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set disabled state; disabling ends any drag
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dragging = false;
        }
    }

    /// Replace the color without a drag (swatch click, typed value, controlled value)
    pub fn set_color(&mut self, color: HexColor) -> HexColor {
        self.color = color;
        color
    }

    /// Pointer pressed inside the area: start dragging and select
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<HexColor> {
        if self.disabled {
            return None;
        }
        self.dragging = true;
        Some(self.set_color(color_at(x, y)))
    }

    /// Pointer moved: select while dragging
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<HexColor> {
        if !self.dragging {
            return None;
        }
        Some(self.set_color(color_at(x, y)))
    }

    /// Pointer released or left the area: finish the drag.
    ///
    /// Returns the final color when a drag was in progress.
    pub fn pointer_up(&mut self) -> Option<HexColor> {
        if !std::mem::replace(&mut self.dragging, false) {
            return None;
        }
        Some(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#ff0000");
    }

    #[test]
    fn hsl_grays() {
        assert_eq!(hsl_to_hex(200.0, 0.0, 50.0), "#808080");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
    }

    #[test]
    fn parse_accepts_short_and_long_forms() {
        assert_eq!(HexColor::parse("#fff").ok(), Some(HexColor::WHITE));
        assert_eq!(HexColor::parse("3B82F6").ok(), Some(HexColor::new(0x3b, 0x82, 0xf6)));
        assert_eq!("#a1b2c3".parse::<HexColor>().ok(), Some(HexColor::new(0xa1, 0xb2, 0xc3)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(HexColor::parse("").is_err());
        assert!(HexColor::parse("#ff").is_err());
        assert!(HexColor::parse("#gg0000").is_err());
        assert!(HexColor::parse("#ffffff00").is_err());
        assert!(HexColor::parse("#ééé").is_err());
    }

    #[test]
    fn display_round_trips() {
        let color = HexColor::new(0x0a, 0xbc, 0xde);
        assert_eq!(color.to_string(), "#0abcde");
        assert_eq!(color.to_rgba_u32(), 0x0abcdeff);
    }

    #[test]
    fn picker_area_maps_to_hue_and_saturation() {
        assert_eq!(color_at(0.0, 1.0), HexColor::new(0xff, 0x00, 0x00));
        assert_eq!(color_at(0.5, 0.0), HexColor::new(0x80, 0x80, 0x80));
        // Out-of-area points are clamped onto the edge
        assert_eq!(color_at(-1.0, 2.0), color_at(0.0, 1.0));
    }

    #[test]
    fn thumb_follows_red_and_green_channels() {
        let (x, y) = thumb_position(HexColor::new(0xff, 0x00, 0x00));
        assert!((x - 1.0).abs() < f32::EPSILON);
        assert!((y - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn drag_lifecycle() {
        let mut drag = PickerDrag::new(HexColor::WHITE);
        assert_eq!(drag.pointer_move(0.5, 0.5), None);

        assert_eq!(drag.pointer_down(0.0, 1.0), Some(HexColor::new(0xff, 0, 0)));
        assert!(drag.is_dragging());
        assert_eq!(drag.pointer_move(1.0 / 3.0, 1.0), Some(HexColor::new(0, 0xff, 0)));

        assert_eq!(drag.pointer_up(), Some(HexColor::new(0, 0xff, 0)));
        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer_up(), None);
    }

    #[test]
    fn disabled_picker_ignores_pointer() {
        let mut drag = PickerDrag::new(HexColor::BLACK);
        drag.set_disabled(true);
        assert_eq!(drag.pointer_down(0.2, 0.2), None);
        assert_eq!(drag.color(), HexColor::BLACK);
    }
}
