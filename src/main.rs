// Tue Jan 20 2026 - Alex

use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;
use sdk_layout_generator::{
    ast::Declaration,
    config::Config,
    orchestrator::{HeaderDiscovery, ParseCoordinator},
    output::JsonWriter,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "C++ SDK layout metadata generator", long_about = None)]
struct Args {
    /// Path to the SDK include directory.
    #[arg(short, long)]
    sdk: PathBuf,

    /// Directory receiving one JSON document per header.
    #[arg(short, long, default_value = "types")]
    output: PathBuf,

    /// Minify JSON output.
    #[arg(long)]
    minify: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,

    /// Worker threads (0 = one per CPU).
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    if !args.no_banner {
        println!("{}", "SDK Layout Generator".cyan().bold());
        println!("{}", "=".repeat(50).cyan());
        println!();
    }

    let config = Config::new()
        .with_sdk_path(args.sdk)
        .with_output_path(args.output)
        .with_minify(args.minify)
        .with_verbose(args.verbose)
        .with_progress(!args.no_progress)
        .with_max_threads(args.threads);

    if let Err(e) = run(&config) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let start_time = Instant::now();

    if !config.sdk_path.is_dir() {
        bail!("Failed to find SDK in {:?}", config.sdk_path);
    }

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads)
        .build_global()
    {
        log::debug!("Thread pool already initialized: {}", e);
    }

    println!(
        "{} Listing source files in {}",
        "[*]".blue(),
        format!("{:?}", config.sdk_path).green()
    );

    let discovery = HeaderDiscovery::new()
        .with_extensions(config.header_extensions.clone())
        .with_skip_suffixes(config.skip_suffixes.clone());
    let files = discovery
        .discover(&config.sdk_path)
        .context("Failed to list source files")?;

    println!("{} Parsing {} source files...", "[*]".blue(), files.len());

    let coordinator = ParseCoordinator::new()
        .with_verbose(config.verbose)
        .with_progress(config.show_progress);
    let outcome = coordinator.parse_all(&files);

    let types: usize = outcome
        .headers
        .iter()
        .map(|header| count_types(&header.declarations))
        .sum();
    println!("{} Found {} types", "[+]".green(), types);

    let writer = JsonWriter::new().with_pretty(!config.minify);
    let mut written = 0usize;
    let mut write_errors = 0usize;
    for header in &outcome.headers {
        match writer.write_header(header, &config.sdk_path, &config.output_path) {
            Ok(_) => written += 1,
            Err(e) => {
                write_errors += 1;
                eprintln!("{} {}", "[!]".red(), e);
            }
        }
    }

    println!();
    println!(
        "{} Wrote {} files to {} in {:.2}s",
        "[+]".green(),
        written,
        format!("{:?}", config.output_path).green(),
        start_time.elapsed().as_secs_f64()
    );
    if outcome.errors > 0 || write_errors > 0 {
        println!(
            "{} {} parse errors, {} write errors",
            "[!]".yellow(),
            outcome.errors,
            write_errors
        );
    }

    if outcome.headers.is_empty() && outcome.errors > 0 {
        bail!("No header could be parsed");
    }
    Ok(())
}

/// Number of struct, class and enum declarations in a forest, namespaces
/// included transitively.
fn count_types(declarations: &[Declaration]) -> usize {
    declarations
        .iter()
        .map(|declaration| match declaration {
            Declaration::Namespace(ns) => count_types(&ns.children),
            Declaration::Struct(aggregate) | Declaration::Class(aggregate) => {
                1 + count_types(&aggregate.nested)
            }
            Declaration::Enum(_) => 1,
        })
        .sum()
}
