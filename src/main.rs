use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use eolscan::{
    checker::default_source,
    config::Config,
    model::ScanSummary,
    output::{print_cli_summary, ReportSet},
    pipeline::EolScanner,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Exit codes: anything past setup degrades and logs instead of failing.
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "eolscan")]
#[command(
    author,
    version,
    about = "Scan package inventory exports for end-of-life status"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an inventory file (or the input directory) against the EOL database
    Scan {
        /// Inventory CSV file; defaults to the first CSV in the input directory
        file: Option<PathBuf>,

        /// Directory searched for inventory files when no FILE is given
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory report artifacts are written to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Lifecycle API base URL
        #[arg(long)]
        api_url: Option<String>,

        /// HTTP timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Scan every CSV in the input directory, each into its own subdirectory
        #[arg(long)]
        all: bool,
    },

    /// Show or create the config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Scan {
            file,
            input,
            output,
            api_url,
            timeout,
            all,
        } => {
            let api_url = api_url.unwrap_or(config.api_base_url);
            let timeout = timeout.unwrap_or(config.timeout_secs);
            let input_dir = input.unwrap_or(config.input_dir);
            let output_dir = output.unwrap_or(config.output_dir);

            run_scan(file, &input_dir, &output_dir, &api_url, timeout, all).await
        }
        Commands::Config { init, path } => {
            handle_config(init, path)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

async fn run_scan(
    file: Option<PathBuf>,
    input_dir: &Path,
    output_dir: &Path,
    api_url: &str,
    timeout_secs: u64,
    all: bool,
) -> Result<u8> {
    // Resolving the work list is the only part allowed to fail the process.
    let files = if let Some(file) = file {
        vec![file]
    } else {
        let candidates = discover_csv_files(input_dir)?;
        if all {
            info!("Found {} CSV files to process", candidates.len());
            candidates
        } else {
            if candidates.len() > 1 {
                warn!(
                    "Multiple CSV files found in {}. Using {}",
                    input_dir.display(),
                    candidates[0].display()
                );
                info!("Use --all to process all CSV files");
            }
            vec![candidates[0].clone()]
        }
    };

    let spinner = phase_spinner("Fetching product list from EOL database...");
    let mut scanner = EolScanner::new(default_source(api_url, timeout_secs)).await;
    spinner.finish_with_message(format!(
        "Found {} products in EOL database",
        scanner.catalog().len()
    ));

    for file in &files {
        info!("Processing {}...", file.display());

        let scan = match scanner.scan_file(file).await {
            Ok(scan) => scan,
            Err(e) => {
                error!("{}", e);
                continue;
            }
        };

        let timestamp = Utc::now();
        let summary = ScanSummary::from_scan(&scan, timestamp);

        // Under --all every file gets its own subdirectory, so artifact
        // sets from different files cannot mix.
        let dest = if all {
            match file.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => output_dir.join(stem),
                None => output_dir.to_path_buf(),
            }
        } else {
            output_dir.to_path_buf()
        };

        let written = ReportSet::new(&dest, timestamp).write_all(&scan.results, &summary)?;

        info!("Generated reports:");
        for path in &written {
            info!("  - {}", path.display());
        }

        print_cli_summary(&scan.results, &summary)?;
    }

    Ok(exit_codes::SUCCESS)
}

/// CSV files directly inside the input directory, sorted by name so
/// repeated runs process them in the same order.
fn discover_csv_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        bail!("Input directory not found: {}", input_dir.display());
    }

    let files: Vec<PathBuf> = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        })
        .collect();

    if files.is_empty() {
        bail!(
            "No CSV files found in {}. Place your CSV file in the input directory.",
            input_dir.display()
        );
    }

    Ok(files)
}

fn phase_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

fn handle_config(init: bool, show_path: bool) -> Result<()> {
    let config_path = Config::config_path();

    if show_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        let config = Config::default();
        config.save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    // Show current config
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        println!("Config file: {}", config_path.display());
        println!();
        println!("{}", content);
    } else {
        println!("No config file found.");
        println!("Run 'eolscan config --init' to create one.");
        println!();
        println!("Config path: {}", config_path.display());
    }

    Ok(())
}
