//! Scale - Size and Radius Lookup Tables
//!
//! Every component takes the same closed `Size` and `Radius` sets and maps
//! them to pixel values here, so an option can never produce an unknown style.

use gpui::{px, Pixels};
use serde::{Deserialize, Serialize};

/// Component size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

impl Size {
    /// Every size, smallest first
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];

    /// Short label for pickers and logs
    pub fn label(&self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }

    /// Text size
    pub fn font_size(&self) -> Pixels {
        px(match self {
            Size::Xs => 12.0,
            Size::Sm => 14.0,
            Size::Md => 16.0,
            Size::Lg => 18.0,
            Size::Xl => 20.0,
        })
    }

    /// Height (and width) of square controls such as pager buttons
    pub fn control(&self) -> Pixels {
        px(match self {
            Size::Xs => 24.0,
            Size::Sm => 32.0,
            Size::Md => 36.0,
            Size::Lg => 40.0,
            Size::Xl => 48.0,
        })
    }

    /// Horizontal and vertical padding of text inputs and buttons
    pub fn padding(&self) -> (Pixels, Pixels) {
        let (x, y) = match self {
            Size::Xs => (8.0, 4.0),
            Size::Sm => (12.0, 8.0),
            Size::Md => (16.0, 8.0),
            Size::Lg => (20.0, 12.0),
            Size::Xl => (24.0, 16.0),
        };
        (px(x), px(y))
    }

    /// Side of a pin input cell
    pub fn pin_cell(&self) -> Pixels {
        px(match self {
            Size::Xs => 32.0,
            Size::Sm => 40.0,
            Size::Md => 48.0,
            Size::Lg => 56.0,
            Size::Xl => 64.0,
        })
    }

    /// Side of checkbox boxes and radio dots
    pub fn indicator(&self) -> Pixels {
        px(match self {
            Size::Xs => 14.0,
            Size::Sm => 18.0,
            Size::Md => 20.0,
            Size::Lg => 24.0,
            Size::Xl => 30.0,
        })
    }

    /// Switch track width and height
    pub fn track(&self) -> (Pixels, Pixels) {
        let (w, h) = match self {
            Size::Xs => (28.0, 16.0),
            Size::Sm => (36.0, 20.0),
            Size::Md => (44.0, 24.0),
            Size::Lg => (52.0, 30.0),
            Size::Xl => (64.0, 36.0),
        };
        (px(w), px(h))
    }

    /// Height of a progress bar
    pub fn bar(&self) -> Pixels {
        px(match self {
            Size::Xs => 4.0,
            Size::Sm => 8.0,
            Size::Md => 16.0,
            Size::Lg => 24.0,
            Size::Xl => 32.0,
        })
    }

    /// Side of the color picker area
    pub fn picker(&self) -> Pixels {
        px(match self {
            Size::Xs => 192.0,
            Size::Sm => 256.0,
            Size::Md => 320.0,
            Size::Lg => 384.0,
            Size::Xl => 448.0,
        })
    }

    /// Spacing between grouped children
    pub fn gap(&self) -> Pixels {
        px(match self {
            Size::Xs => 8.0,
            Size::Sm => 12.0,
            Size::Md => 16.0,
            Size::Lg => 20.0,
            Size::Xl => 32.0,
        })
    }

    /// Width of modals and drawers
    pub fn panel_width(&self) -> Pixels {
        px(match self {
            Size::Xs => 320.0,
            Size::Sm => 380.0,
            Size::Md => 440.0,
            Size::Lg => 620.0,
            Size::Xl => 780.0,
        })
    }

    /// Maximum width of a container
    pub fn container_width(&self) -> Pixels {
        px(match self {
            Size::Xs => 540.0,
            Size::Sm => 720.0,
            Size::Md => 960.0,
            Size::Lg => 1140.0,
            Size::Xl => 1320.0,
        })
    }
}

/// Corner radius
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
    /// Pill shape
    Full,
}

impl Radius {
    pub fn pixels(&self) -> Pixels {
        px(match self {
            Radius::None => 0.0,
            Radius::Xs => 4.0,
            Radius::Sm => 6.0,
            Radius::Md => 8.0,
            Radius::Lg => 12.0,
            Radius::Xl => 16.0,
            Radius::Full => 9999.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_grow_monotonically() {
        for pair in Size::ALL.windows(2) {
            assert!(pair[0].control() < pair[1].control());
            assert!(pair[0].font_size() < pair[1].font_size());
            assert!(pair[0].pin_cell() < pair[1].pin_cell());
            assert!(pair[0].bar() < pair[1].bar());
        }
    }

    #[test]
    fn options_deserialize_from_lowercase_names() {
        #[derive(Deserialize)]
        struct Options {
            size: Size,
            radius: Radius,
        }

        let options: Options = toml::from_str("size = \"xl\"\nradius = \"full\"").expect("valid toml");
        assert_eq!(options.size, Size::Xl);
        assert_eq!(options.radius, Radius::Full);
        assert!(toml::from_str::<Options>("size = \"huge\"\nradius = \"sm\"").is_err());
    }
}
