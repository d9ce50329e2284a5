// Thu Jan 22 2026 - Alex

use crate::parser::{HeaderParser, ParseError, ParsedHeader};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;

/// Result of one batch run. Failed files are dropped from `headers` and
/// only counted; the run itself never aborts.
pub struct ParseOutcome {
    pub headers: Vec<ParsedHeader>,
    pub errors: usize,
}

/// Fans the file list out over the rayon pool. Every worker holds its own
/// parser handle, so nothing is shared between concurrent parses.
pub struct ParseCoordinator {
    verbose: bool,
    show_progress: bool,
}

impl ParseCoordinator {
    pub fn new() -> Self {
        Self {
            verbose: false,
            show_progress: true,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn parse_all(&self, files: &[PathBuf]) -> ParseOutcome {
        let progress = if self.show_progress {
            let bar = ProgressBar::new(files.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            bar.set_message("Parsing headers...");
            Some(bar)
        } else {
            None
        };

        let results: Vec<Result<ParsedHeader, ParseError>> = files
            .par_iter()
            .map_init(
                || HeaderParser::new(),
                |parser, path| {
                    let outcome = match parser {
                        Ok(parser) => parser.parse_file(path),
                        // The grammar failed to load for this worker; retry
                        // so the reported error names the real cause.
                        Err(_) => HeaderParser::new().and_then(|mut fresh| fresh.parse_file(path)),
                    };
                    if let Some(ref bar) = progress {
                        bar.inc(1);
                    }
                    outcome
                },
            )
            .collect();

        if let Some(bar) = progress {
            bar.finish_with_message("Done");
        }

        let mut headers = Vec::new();
        let mut errors = 0;
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(header) => headers.push(header),
                Err(error) => {
                    errors += 1;
                    if self.verbose {
                        eprintln!(
                            "{} Failed to parse file {}: {}",
                            "[!]".red(),
                            format!("{:?}", path).green(),
                            error
                        );
                    } else {
                        eprintln!(
                            "{} Failed to parse file {}",
                            "[!]".red(),
                            format!("{:?}", path).green()
                        );
                    }
                }
            }
        }

        ParseOutcome { headers, errors }
    }
}

impl Default for ParseCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
