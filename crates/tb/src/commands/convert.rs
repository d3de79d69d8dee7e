//! JSON and YAML converter commands.
//!
//! Both read the whole of stdin and write the converted document to stdout.

use std::io::{self, Read, Write};

use super::Result;
use crate::encoding::{parse_json, parse_yaml, to_json, to_yaml};

/// Converts JSON on `input` into YAML on `output`.
pub fn json_to_yaml<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    let value = parse_json(input)?;
    let yaml = to_yaml(&value)?;
    writeln!(output, "{}", yaml.trim_end_matches('\n'))?;
    Ok(())
}

/// Converts YAML on `input` into JSON on `output`.
pub fn yaml_to_json<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
    let value = parse_yaml(input)?;
    writeln!(output, "{}", to_json(&value)?)?;
    Ok(())
}

/// Executes `tb json-to-yaml`.
pub fn execute_json_to_yaml() -> Result<()> {
    json_to_yaml(io::stdin().lock(), io::stdout().lock())
}

/// Executes `tb yaml-to-json`.
pub fn execute_yaml_to_json() -> Result<()> {
    yaml_to_json(io::stdin().lock(), io::stdout().lock())
}
