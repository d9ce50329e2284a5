// Thu Jan 22 2026 - Alex

use crate::parser::ParsedHeader;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Header {path:?} is outside the source root")]
    OutsideRoot { path: PathBuf },
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes one JSON document per parsed header, mirroring the header's path
/// relative to the source root with a `.json` extension.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_header(
        &self,
        header: &ParsedHeader,
        source_root: &Path,
        output_root: &Path,
    ) -> Result<PathBuf, OutputError> {
        let relative = header
            .path
            .strip_prefix(source_root)
            .map_err(|_| OutputError::OutsideRoot {
                path: header.path.clone(),
            })?;
        let target = output_root.join(relative).with_extension("json");

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = if self.pretty {
            serde_json::to_string_pretty(&header.declarations)
        } else {
            serde_json::to_string(&header.declarations)
        }
        .map_err(|source| OutputError::Json {
            path: target.clone(),
            source,
        })?;

        fs::write(&target, data).map_err(|source| OutputError::Io {
            path: target.clone(),
            source,
        })?;
        Ok(target)
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
