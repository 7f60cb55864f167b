use crate::constants::STDIN_INDICATOR;
use crate::error::{Error, Result};
use std::path::Path;

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Reads a file, or stdin when `source` is `-`.
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN_INDICATOR {
        read_from(std::io::stdin())
    } else {
        std::fs::read_to_string(source).map_err(Error::IoError)
    }
}

/// Parses a view; blank input is an empty object.
pub fn parse_view(buf: &str) -> Result<serde_json::Value> {
    if buf.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(buf)?)
}
