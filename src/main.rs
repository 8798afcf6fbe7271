//! text-tools: string distance, alignment and run-length utilities

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::{Path, PathBuf};
use text_tools::{
    cli::{self, CommandOutput, DiffCommand},
    config::{AppConfig, ConfigOverrides, Validatable},
    pipeline::{InputSource, OutputFormat, OutputTarget, exit_codes, write_output},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "text-tools")]
#[command(version)]
#[command(about = "String distance, alignment and run-length utilities", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Changes detected (diff --fail-on-change) / no fuzzy or rank match
    3  Error occurred

EXAMPLES:
    text-tools distance kitten sitting
    text-tools lcs JavaScript TypeScript
    text-tools encode AAABBBCCCCDDEEEE
    text-tools diff --files old.txt new.txt -o json
    text-tools rank colour color collar cooler --preset permissive")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long, global = true)]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Levenshtein edit distance between two strings
    Distance {
        a: String,
        b: String,
        /// Lowercase both strings before comparing
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// Longest common substring of two strings
    Lcs { a: String, b: String },

    /// Run-length encode a string (ASCII digits are rejected)
    Encode { text: String },

    /// Decode a run-length encoded string
    Decode {
        encoded: String,
        /// Refuse to expand beyond this many characters
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Words added and removed between two texts
    Diff {
        old: String,
        new: String,
        /// Treat OLD and NEW as file paths (`-` reads stdin)
        #[arg(long)]
        files: bool,
        /// Exit with code 1 if any words differ
        #[arg(long)]
        fail_on_change: bool,
    },

    /// Fuzzy subsequence search of a query across texts
    Fuzzy {
        query: String,
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Rank candidates by similarity to a query
    Rank {
        query: String,
        #[arg(required = true)]
        candidates: Vec<String>,
        /// Similarity preset (strict, balanced, permissive)
        #[arg(long)]
        preset: Option<String>,
        /// Minimum score (0.0-1.0), overrides the preset
        #[arg(long)]
        threshold: Option<f64>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema,

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (defaults + file)
    Show,
    /// Print config file search paths and the discovered file
    Path,
    /// Write an example .text-tools.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) if code != exit_codes::SUCCESS => std::process::exit(code),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Collect the values given on the command line. Anything left unset keeps
/// the config file's value.
fn cli_overrides(cli: &Cli) -> ConfigOverrides {
    let mut overrides = ConfigOverrides {
        output_format: cli.output,
        output_file: cli.output_file.clone(),
        quiet: cli.quiet.then_some(true),
        ..ConfigOverrides::default()
    };
    match &cli.command {
        Commands::Rank {
            preset,
            threshold,
            limit,
            ..
        } => {
            overrides.preset.clone_from(preset);
            overrides.threshold = *threshold;
            overrides.max_results = *limit;
        }
        Commands::Diff { fail_on_change, .. } => {
            overrides.fail_on_change = fail_on_change.then_some(true);
        }
        _ => {}
    }
    overrides
}

fn run(cli: Cli) -> Result<i32> {
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli_overrides(&cli))?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n  {}", messages.join("\n  "));
    }

    let format = config.output.format;
    let output = match cli.command {
        Commands::Distance { a, b, ignore_case } => {
            let fold_case = ignore_case || config.matching.fold_case.unwrap_or(false);
            cli::run_distance(&a, &b, fold_case, format)?
        }
        Commands::Lcs { a, b } => cli::run_lcs(&a, &b, format)?,
        Commands::Encode { text } => cli::run_encode(&text, format)?,
        Commands::Decode { encoded, max_len } => {
            let limit = max_len.unwrap_or(config.codec.max_decoded_len);
            cli::run_decode(&encoded, limit, format)?
        }
        Commands::Diff {
            old, new, files, ..
        } => cli::run_diff(&DiffCommand {
            old: InputSource::from_arg(&old, files),
            new: InputSource::from_arg(&new, files),
            fail_on_change: config.behavior.fail_on_change,
            format,
        })?,
        Commands::Fuzzy { query, texts } => cli::run_fuzzy(&query, &texts, format)?,
        Commands::Rank {
            query, candidates, ..
        } => {
            let similarity = config.matching.similarity_config()?;
            let errors = similarity.validate();
            if !errors.is_empty() {
                bail!("invalid similarity settings: {}", errors[0]);
            }
            cli::run_rank(&query, &candidates, &similarity, format)?
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "text-tools", &mut io::stdout());
            return Ok(exit_codes::SUCCESS);
        }
        Commands::ConfigSchema => {
            CommandOutput::success(text_tools::config::generate_json_schema())
        }
        Commands::Config { action } => return run_config(action, cli.config.as_deref()),
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&output.content, &target, config.behavior.quiet)?;
    Ok(output.exit_code)
}

fn run_config(action: ConfigAction, explicit: Option<&Path>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = text_tools::config::load_or_default(explicit)?;
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                text_tools::config::user_config_dir(),
                ::dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in text_tools::config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match text_tools::config::discover_config_file(explicit)? {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".text-tools.yaml");
            if target.exists() {
                bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, text_tools::config::generate_full_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}
