//! Color table formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use todoist_api_rs::color::Color;

use super::helpers::header;

/// JSON output structure for one color.
#[derive(Serialize)]
pub struct ColorOutput {
    pub name: &'static str,
    pub hex: String,
}

/// Formats the color table as JSON.
pub fn format_colors_json(colors: &[Color]) -> Result<String, serde_json::Error> {
    let output: Vec<ColorOutput> = colors
        .iter()
        .map(|c| ColorOutput {
            name: c.name(),
            hex: format!("#{}", c.hex_code()),
        })
        .collect();
    serde_json::to_string_pretty(&output)
}

/// Parses a hex code into RGB components.
fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Formats the color table, with a swatch when colors are on.
pub fn format_colors_table(colors: &[Color], use_colors: bool) -> String {
    let mut output = header(&format!("{:<12} {}", "Name", "Hex"), use_colors);
    for color in colors {
        let hex = format!("#{}", color.hex_code());
        let swatch = match rgb(color.hex_code()) {
            Some((r, g, b)) if use_colors => format!(" {}", "██".truecolor(r, g, b)),
            _ => String::new(),
        };
        output.push_str(&format!("{:<12} {}{}\n", color.name(), hex, swatch));
    }
    output
}
