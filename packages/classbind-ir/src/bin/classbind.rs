//! Classbind CLI
//!
//! Turns Java class-record documents into jnim binding declarations.
//!
//! # Usage
//!
//! ```bash
//! # One document → classes/Foo.nim (or -o target)
//! classbind generate classes/Foo.json
//!
//! # Every *.json under a directory, outputs written beside inputs
//! classbind generate classes/ -c classbind.yaml
//!
//! # Java sources → class-record documents
//! classbind extract src/main/java
//!
//! # Print the effective configuration
//! classbind config -c classbind.yaml
//! ```
//!
//! # Exit Codes
//!
//! - 0: at least one class translated
//! - 1: input missing, or nothing translated
//! - 2: malformed document or configuration error

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use classbind_ir::config::ClassbindConfig;
use classbind_ir::errors::{ClassbindError, Result};
use classbind_ir::pipeline::{
    extract_directory, extract_to_json, output_path_for, process_document, run_batch,
    write_output,
};

#[derive(Parser)]
#[command(name = "classbind")]
#[command(version)]
#[command(about = "Generate jnim bindings from Java class-record documents", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a document, or every document under a directory
    Generate {
        /// Document file or directory
        input: PathBuf,

        /// Output file (single-document mode only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Process batch documents sequentially
        #[arg(long)]
        no_parallel: bool,
    },

    /// Extract class-record documents from Java sources
    Extract {
        /// `.java` file or directory
        input: PathBuf,

        /// Output file (single-file mode; stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as YAML
    Config {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code_for(error: &ClassbindError) -> ExitCode {
    match error {
        ClassbindError::InputNotFound(_) => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            input,
            output,
            config,
            no_parallel,
        } => {
            let mut config = load_config(config.as_deref())?;
            if no_parallel {
                config.parallel = false;
            }
            generate(&input, output, &config)
        }
        Commands::Extract { input, output } => extract(&input, output),
        Commands::Config { config } => {
            let config = load_config(config.as_deref())?;
            print!("{}", config.to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ClassbindConfig> {
    match path {
        Some(path) => Ok(ClassbindConfig::from_yaml(path)?.into_inner()),
        None => Ok(ClassbindConfig::default()),
    }
}

fn generate(input: &Path, output: Option<PathBuf>, config: &ClassbindConfig) -> Result<ExitCode> {
    if !input.exists() {
        return Err(ClassbindError::InputNotFound(input.to_path_buf()));
    }

    if input.is_dir() {
        if output.is_some() {
            tracing::warn!("--output is ignored in directory mode");
        }
        let report = run_batch(input, config)?;
        println!(
            "Translated {} classes from {} documents ({} empty, {} failed)",
            report.total_classes(),
            report.translated.len(),
            report.empty.len(),
            report.failed.len()
        );
        for failure in &report.failed {
            eprintln!("  {}: {}", failure.input.display(), failure.message);
        }
        return Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let outcome = process_document(input, config)?;
    if outcome.is_empty() {
        eprintln!("No classes found in {}", input.display());
        return Ok(ExitCode::from(1));
    }

    let target = output.unwrap_or_else(|| output_path_for(input, config));
    write_output(&target, &outcome.text)?;
    println!(
        "Translated {} classes: {} -> {}",
        outcome.class_count,
        input.display(),
        target.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn extract(input: &Path, output: Option<PathBuf>) -> Result<ExitCode> {
    if input.is_dir() {
        let report = extract_directory(input)?;
        println!(
            "Extracted {} documents ({} without classes, {} failed)",
            report.written.len(),
            report.empty.len(),
            report.failed.len()
        );
        return Ok(if report.written.is_empty() {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        });
    }

    let (json, class_count) = extract_to_json(input)?;
    if class_count == 0 {
        eprintln!("No classes found in {}", input.display());
        return Ok(ExitCode::from(1));
    }

    match output {
        Some(target) => write_output(&target, &json)?,
        None => println!("{}", json),
    }
    Ok(ExitCode::SUCCESS)
}
