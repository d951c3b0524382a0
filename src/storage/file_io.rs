//! File I/O utilities with atomic writes
//!
//! Item files may be JSON or YAML; the format is picked from the file
//! extension.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::WishlistError;

/// Serialization format of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Result<Self, WishlistError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(WishlistError::Storage(format!(
                "Unsupported file type for {} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    fn temp_extension(&self) -> &'static str {
        match self {
            Self::Json => "json.tmp",
            Self::Yaml => "yaml.tmp",
        }
    }
}

/// Read a JSON or YAML file, returning an error if it doesn't exist
pub fn read_data<T, P>(path: P) -> Result<T, WishlistError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = DataFormat::from_path(path)?;

    if !path.exists() {
        return Err(WishlistError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| WishlistError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match format {
        DataFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            WishlistError::Json(format!("Failed to parse {}: {}", path.display(), e))
        }),
        DataFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            WishlistError::Yaml(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write a JSON or YAML file atomically (write to temp, then rename)
pub fn write_data_atomic<T, P>(path: P, data: &T) -> Result<(), WishlistError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = DataFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            WishlistError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension(format.temp_extension());

    if let Err(e) = write_temp(&temp_path, format, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WishlistError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_temp<T: Serialize>(
    temp_path: &Path,
    format: DataFormat,
    data: &T,
) -> Result<(), WishlistError> {
    let file = File::create(temp_path)
        .map_err(|e| WishlistError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    match format {
        DataFormat::Json => serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| WishlistError::Storage(format!("Failed to serialize data: {}", e)))?,
        DataFormat::Yaml => serde_yaml::to_writer(&mut writer, data)
            .map_err(|e| WishlistError::Storage(format!("Failed to serialize data: {}", e)))?,
    }

    writer
        .flush()
        .map_err(|e| WishlistError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WishlistError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
