use std::fs;
use std::io;
use std::path::Path;
use std::process;

use thaana_core::tables::{self, parse_tables_toml, TableError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum TableOpsError {
    #[error("Error reading {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Parse and validate a tables file, returning its legacy and Latin sizes.
pub fn validate_file(path: &Path) -> Result<(usize, usize), TableOpsError> {
    let content = fs::read_to_string(path).map_err(|source| TableOpsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let tables = parse_tables_toml(&content)?;
    Ok((tables.legacy_len(), tables.latin_len()))
}

pub fn tables_export() {
    print!("{}", tables::default_toml());
}

pub fn tables_validate(file: &str) {
    let (legacy, latin) = die!(validate_file(Path::new(file)), "Error: {}");
    println!("OK: {legacy} legacy mappings, {latin} latin mappings");
}
