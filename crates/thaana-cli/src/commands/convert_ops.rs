use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::ValueEnum;
use thaana_core::tables::parse_tables_toml;
use thaana_core::{ConvertError, Converter};

use crate::codepoints::{format_codepoints, parse_codepoints, ParseCodepointsError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Utf8,
    Codepoints,
    Entities,
    Legacy,
    Latin,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Utf8 => "utf8",
            Format::Codepoints => "codepoints",
            Format::Entities => "entities",
            Format::Legacy => "legacy",
            Format::Latin => "latin",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertOpsError {
    #[error("no conversion from {from} to {to}")]
    Unsupported { from: Format, to: Format },
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Codepoints(#[from] ParseCodepointsError),
}

/// Run one of the fourteen conversions on raw input bytes.
///
/// Codepoint input and output use the decimal list form.
pub fn run_conversion(
    conv: &Converter,
    from: Format,
    to: Format,
    input: &[u8],
) -> Result<Vec<u8>, ConvertOpsError> {
    use Format::*;

    let out = match (from, to) {
        (Utf8, Codepoints) => format_codepoints(&conv.utf8_to_codepoints(input)).into_bytes(),
        (Utf8, Legacy) => conv.utf8_to_legacy(input),
        (Utf8, Entities) => conv.utf8_to_entities(input),

        (Codepoints, Utf8) => conv.codepoints_to_utf8(&parse_codepoints(input)?)?,
        (Codepoints, Entities) => conv.codepoints_to_entities(&parse_codepoints(input)?),
        (Codepoints, Legacy) => conv.codepoints_to_legacy(&parse_codepoints(input)?),

        (Entities, Codepoints) => {
            format_codepoints(&conv.entities_to_codepoints(input)?).into_bytes()
        }
        (Entities, Utf8) => conv.entities_to_utf8(input)?,
        (Entities, Legacy) => conv.entities_to_legacy(input),

        (Legacy, Utf8) => conv.legacy_to_utf8(input),
        (Legacy, Entities) => conv.legacy_to_entities(input),
        (Legacy, Codepoints) => format_codepoints(&conv.legacy_to_codepoints(input)).into_bytes(),

        (Latin, Legacy) => conv.latin_to_legacy(input),
        (Legacy, Latin) => conv.legacy_to_latin(input),

        (from, to) => return Err(ConvertOpsError::Unsupported { from, to }),
    };
    Ok(out)
}

fn read_input(text: Option<String>) -> io::Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(buf)
}

pub fn convert_cmd(from: Format, to: Format, text: Option<String>, tables_file: Option<&str>) {
    let custom;
    let conv = match tables_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            let tables = die!(parse_tables_toml(&content), "Error in {path}: {}");
            custom = Converter::with_tables(tables);
            &custom
        }
        None => Converter::global(),
    };

    let input = die!(read_input(text), "Error reading input: {}");
    let output = die!(run_conversion(conv, from, to, &input), "Error: {}");

    let mut stdout = io::stdout().lock();
    die!(stdout.write_all(&output), "Error writing output: {}");
    die!(stdout.write_all(b"\n"), "Error writing output: {}");
}
