//! Colors command implementation.

use todoist_api_rs::color::Color;

use super::{CommandContext, Result};
use crate::output::{format_colors_json, format_colors_table};

/// Prints every color name with its hex code.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_colors_json(&Color::ALL)?);
    } else if !ctx.quiet {
        print!("{}", format_colors_table(&Color::ALL, ctx.use_colors));
    }
    Ok(())
}
