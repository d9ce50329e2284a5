// Tue Jan 20 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to load C++ grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("Parser produced no syntax tree")]
    NoTree,
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
