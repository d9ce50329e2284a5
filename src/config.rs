// Tue Jan 20 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sdk_path: PathBuf,
    pub output_path: PathBuf,
    pub minify: bool,
    pub verbose: bool,
    pub show_progress: bool,
    pub max_threads: usize,
    pub header_extensions: Vec<String>,
    pub skip_suffixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sdk_path: PathBuf::from("."),
            output_path: PathBuf::from("types"),
            minify: false,
            verbose: false,
            show_progress: true,
            max_threads: num_cpus::get(),
            header_extensions: vec!["hpp".to_string(), "h".to_string()],
            skip_suffixes: vec!["-inl.hpp".to_string()],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sdk_path(mut self, path: PathBuf) -> Self {
        self.sdk_path = path;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        if threads > 0 {
            self.max_threads = threads;
        }
        self
    }
}
