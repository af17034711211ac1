use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use distritos::scoring::ScoreTable;
use distritos::table::IndicatorRecord;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score districts across life domains
    Score {
        /// Indicator data file: long-form records as .json or .yaml
        #[arg(short, long)]
        data: PathBuf,

        /// Domain to score (repeatable; default: all configured domains)
        #[arg(long = "domain")]
        domains: Vec<String>,

        /// Write all score tables as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the district code/name lookup table
    Districts,
    /// Write a starter config with the built-in domain weight sets
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "distritos")]
#[command(about = "Quality-of-life scoring for Madrid's districts", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/distritos/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match distritos::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let domains = distritos::config::effective_domains(&config);

    // Validate the effective domain set at startup
    if let Err(errors) = distritos::scoring::validate_domains(&domains) {
        eprintln!("Domain config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Loaded {} domain weight sets", domains.len());
        for domain in &domains {
            eprintln!(
                "  {}: {} indicators, weight sum {:.6}",
                domain.name,
                domain.indicators.len(),
                domain.weight_sum()
            );
        }
    }

    let use_colors = distritos::output::should_use_colors();

    match cli.command {
        Commands::Score {
            data,
            domains: requested,
            output,
        } => {
            // Resolve requested domain names against the effective set
            let selected: Vec<_> = if requested.is_empty() {
                domains.iter().collect()
            } else {
                let mut selected = Vec::with_capacity(requested.len());
                for name in &requested {
                    match domains.iter().find(|d| &d.name == name) {
                        Some(d) => selected.push(d),
                        None => {
                            eprintln!(
                                "Unknown domain '{}'. Configured domains: {}",
                                name,
                                domains
                                    .iter()
                                    .map(|d| d.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            );
                            std::process::exit(EXIT_CONFIG);
                        }
                    }
                }
                selected
            };

            let records = match load_records(&data) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Data error: {:#}", e);
                    std::process::exit(EXIT_DATA);
                }
            };

            if cli.verbose {
                eprintln!("Read {} records from {}", records.len(), data.display());
            }

            let records = distritos::prepare::clean_records(records);
            let table = distritos::table::from_records(&records);

            if cli.verbose {
                eprintln!(
                    "Pivoted into {} districts x {} indicators",
                    table.len(),
                    table.columns().count()
                );
            }

            let mut results: Vec<ScoreTable> = Vec::with_capacity(selected.len());
            for domain in selected {
                match distritos::scoring::compute_domain_score(&table, domain) {
                    Ok(scored) => results.push(scored),
                    Err(e) => {
                        eprintln!("Scoring error: {}", e);
                        std::process::exit(EXIT_DATA);
                    }
                }
            }

            for scored in &results {
                println!(
                    "{}",
                    distritos::output::format_score_table(scored, use_colors)
                );
                if cli.verbose {
                    for row in &scored.rows {
                        eprintln!(
                            "{}",
                            distritos::output::format_district_detail(row, false)
                        );
                    }
                }
                println!();
            }

            if let Some(path) = output {
                if let Err(e) = write_results(&path, &results) {
                    eprintln!("Output error: {:#}", e);
                    std::process::exit(EXIT_DATA);
                }
                println!("Wrote {} score tables to {}", results.len(), path.display());
            }
        }
        Commands::Districts => {
            println!("{}", distritos::output::format_districts_list(use_colors));
        }
        Commands::Init => {
            if let Err(e) = write_starter_config() {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Read long-form indicator records from a JSON or YAML file.
fn load_records(path: &Path) -> Result<Vec<IndicatorRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file at {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display())),
        "yaml" | "yml" => serde_saphyr::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display())),
        other => anyhow::bail!(
            "Unsupported data format '{}' for {} (expected .json, .yaml or .yml)",
            other,
            path.display()
        ),
    }
}

/// Write score tables as pretty JSON, atomically so a crash mid-write never
/// leaves a truncated file.
fn write_results(path: &Path, results: &[ScoreTable]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, results).context("Failed to serialize score tables")?;
    file.commit().context("Failed to save score tables")?;
    Ok(())
}

/// Write the built-in domain weight sets to the default config path.
/// Refuses to overwrite an existing config.
fn write_starter_config() -> Result<()> {
    distritos::config::ensure_config_dir()?;
    let path = distritos::config::get_config_path();
    if path.exists() {
        anyhow::bail!("Config already exists at {}", path.display());
    }

    let config = distritos::config::Config {
        domains: distritos::scoring::builtin_domains(),
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize starter config")?;

    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    use std::io::Write;
    file.write_all(yaml.as_bytes())
        .context("Failed to write starter config")?;
    file.commit().context("Failed to save starter config")?;

    println!("Wrote starter config to {}", path.display());
    Ok(())
}
