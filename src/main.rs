use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use playbook_mapper::batch::{BatchOptions, BatchProcessor, BatchResult};
use playbook_mapper::config::MapperConfig;
use playbook_mapper::dataset::{OutputFormat, ResultWriter};
use playbook_mapper::utils::hash_utils;

#[derive(Parser)]
#[command(name = "playbook-mapper")]
#[command(about = "Map prospect companies to outbound playbooks, personas and messaging", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every company in a CSV file or a directory of CSV files
    Classify {
        /// CSV file or directory of CSV files
        input: PathBuf,

        /// Output file; format is inferred from the extension unless --format is given
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (csv, json, yaml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Only classify the first N rows
        #[arg(long)]
        max_rows: Option<usize>,

        /// Number of worker threads
        #[arg(long)]
        threads: Option<usize>,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Don't draw a progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Show the playbook distribution for an input without writing anything
    Check {
        /// CSV file or directory of CSV files
        input: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_summary(batch: &BatchResult) {
    println!("Classified {} companies", batch.stats.total_rows);
    for (playbook, count) in &batch.stats.playbooks {
        println!("  {:<40} {}", playbook, count);
    }
    println!(
        "  placeholder value props: {} ({:.1}%), padded personas: {}, generic subjects: {}",
        batch.stats.padded_value_props,
        batch.stats.padding_rate(),
        batch.stats.padded_personas,
        batch.stats.fallback_subjects,
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Classify { input, output, format, max_rows, threads, config, no_progress } => {
            let mut settings = match config {
                Some(path) => MapperConfig::load(path)?,
                None => MapperConfig::default(),
            };

            // Command line flags take precedence over the config file
            if max_rows.is_some() {
                settings.batch.max_rows = max_rows;
            }
            if threads.is_some() {
                settings.batch.parallel_threads = threads;
            }
            if no_progress {
                settings.batch.show_progress = false;
            }
            if output.is_some() {
                settings.output.path = output;
            }
            if format.is_some() {
                settings.output.format = format;
            }

            let processor = BatchProcessor::new(settings.batch.clone());
            let (sources, batch) = processor.process_path(&input)?;
            let writer = ResultWriter::new(settings.resolved_format());

            match &settings.output.path {
                Some(path) => {
                    let source_hash = hash_utils::hash_files(&sources)?;
                    let report = writer.build_report(&batch, &sources, Some(source_hash));
                    writer.write_report(&report, path)?;
                    print_summary(&batch);
                }
                None => {
                    let report = writer.build_report(&batch, &sources, None);
                    print!("{}", writer.render(&report)?);
                }
            }
        }

        Commands::Check { input } => {
            let processor = BatchProcessor::new(BatchOptions {
                show_progress: false,
                ..BatchOptions::default()
            });
            let (sources, batch) = processor.process_path(&input)?;
            info!("Checked {} sheets", sources.len());
            print_summary(&batch);
            println!("Processing logic ready - use `classify` to batch process all {} companies", batch.stats.total_rows);
        }
    }

    Ok(())
}
