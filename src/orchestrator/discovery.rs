// Thu Jan 22 2026 - Alex

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursive header discovery under the SDK include root. Implementation
/// headers (`-inl.hpp`) are excluded; results are sorted so batch runs are
/// deterministic.
pub struct HeaderDiscovery {
    extensions: Vec<String>,
    skip_suffixes: Vec<String>,
}

impl HeaderDiscovery {
    pub fn new() -> Self {
        Self {
            extensions: vec!["hpp".to_string(), "h".to_string()],
            skip_suffixes: vec!["-inl.hpp".to_string()],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_skip_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.skip_suffixes = suffixes;
        self
    }

    pub fn discover(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if self.is_header(&path) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_header(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => return false,
        };
        if self.skip_suffixes.iter().any(|suffix| name.ends_with(suffix)) {
            return false;
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(extension) => self.extensions.iter().any(|e| e == extension),
            None => false,
        }
    }
}

impl Default for HeaderDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
