//! Todoist color codes.
//!
//! Projects and labels carry one of a fixed set of named colors. See
//! <https://developer.todoist.com/guides/#colors>.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named Todoist color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    BerryRed,
    Red,
    Orange,
    Yellow,
    OliveGreen,
    LimeGreen,
    Green,
    MintGreen,
    Teal,
    SkyBlue,
    LightBlue,
    Blue,
    Grape,
    Violet,
    Lavender,
    Magenta,
    Salmon,
    Charcoal,
    Grey,
    Taupe,
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown color: {name}")]
pub struct ParseColorError {
    /// The name that failed to parse.
    pub name: String,
}

impl Color {
    /// Every color, in the order Todoist presents them.
    pub const ALL: [Color; 20] = [
        Color::BerryRed,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::OliveGreen,
        Color::LimeGreen,
        Color::Green,
        Color::MintGreen,
        Color::Teal,
        Color::SkyBlue,
        Color::LightBlue,
        Color::Blue,
        Color::Grape,
        Color::Violet,
        Color::Lavender,
        Color::Magenta,
        Color::Salmon,
        Color::Charcoal,
        Color::Grey,
        Color::Taupe,
    ];

    /// Returns the API name of the color, e.g. `berry_red`.
    pub fn name(&self) -> &'static str {
        self.metadata().0
    }

    /// Returns the hex code of the color without a leading `#`.
    pub fn hex_code(&self) -> &'static str {
        self.metadata().1
    }

    fn metadata(&self) -> (&'static str, &'static str) {
        match self {
            Color::BerryRed => ("berry_red", "b8256f"),
            Color::Red => ("red", "db4035"),
            Color::Orange => ("orange", "ff9933"),
            Color::Yellow => ("yellow", "fad000"),
            Color::OliveGreen => ("olive_green", "afb83b"),
            Color::LimeGreen => ("lime_green", "7ecc49"),
            Color::Green => ("green", "299438"),
            Color::MintGreen => ("mint_green", "6accbc"),
            Color::Teal => ("teal", "158fad"),
            Color::SkyBlue => ("sky_blue", "14aaf5"),
            Color::LightBlue => ("light_blue", "96c3eb"),
            Color::Blue => ("blue", "4073ff"),
            Color::Grape => ("grape", "884dff"),
            Color::Violet => ("violet", "af38eb"),
            Color::Lavender => ("lavender", "eb96eb"),
            Color::Magenta => ("magenta", "e05194"),
            Color::Salmon => ("salmon", "ff8d85"),
            Color::Charcoal => ("charcoal", "808080"),
            Color::Grey => ("grey", "b8b8b8"),
            Color::Taupe => ("taupe", "ccac93"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name() == s)
            .ok_or_else(|| ParseColorError { name: s.to_string() })
    }
}
