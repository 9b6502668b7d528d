use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Return the theme with the given name, falling back to the default
    /// for unknown names.
    ///
    pub fn by_name(name: &str) -> Self {
        match name {
            "rose-pine-dawn" => Self::rose_pine_dawn(),
            "tokyo-night" => Self::tokyo_night(),
            _ => {
                log::warn!("Unknown theme '{}', using default.", name);
                Self::default()
            }
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            secondary: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            accent: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            banner: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
            text_secondary: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            }, // Subtext
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Comment
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            warning: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            }, // Orange
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Cyan
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            }, // Dark blue
            highlight_bg: ColorSpec {
                r: 40,
                g: 52,
                b: 87,
            }, // Selection
            highlight_fg: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            secondary: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Green
            accent: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
            banner: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
            text: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            text_secondary: ColorSpec {
                r: 121,
                g: 117,
                b: 147,
            }, // Subtext
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            success: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Pine
            warning: ColorSpec {
                r: 255,
                g: 210,
                b: 0,
            }, // Gold
            error: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            info: ColorSpec {
                r: 61,
                g: 174,
                b: 233,
            }, // Foam
            border_active: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            border_normal: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            highlight_bg: ColorSpec {
                r: 242,
                g: 233,
                b: 222,
            }, // Overlay
            highlight_fg: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}
