//! CLI command definitions and execution
//!
//! Every command parses one locator, applies a single operation and prints
//! the result. Commands share the locator output shape defined here.

use clap::{Parser, Subcommand, ValueEnum};
use s3path_core::{ConfigManager, Error, Locator};
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod inspect;
mod join;
mod parent;
mod parts;
mod relative;
mod with_name;
mod with_suffix;

/// s3path - path operations on object storage URIs
///
/// Decomposes and rewrites URIs like s3://bucket/dir/file.tar.gz the way a
/// filesystem path library would, without touching the object store.
#[derive(Parser, Debug)]
#[command(name = "s3path")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false", conflicts_with = "output")]
    pub json: bool,

    /// Output format, overriding the config default
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output formats selectable with `--output`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every component of a URI
    Inspect(inspect::InspectArgs),

    /// List the path segments of a URI
    Parts(parts::PartsArgs),

    /// Show the parent (or all ancestors) of a URI
    Parent(parent::ParentArgs),

    /// Append keys to a URI
    Join(join::JoinArgs),

    /// Replace the final segment of a URI
    WithName(with_name::WithNameArgs),

    /// Replace the suffix of the final segment of a URI
    WithSuffix(with_suffix::WithSuffixArgs),

    /// Show a URI's key relative to a base URI
    Relative(relative::RelativeArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub fn execute(cli: Cli) -> ExitCode {
    // Completions never depend on config
    let command = match cli.command {
        Commands::Completions(args) => return completions::execute(args),
        command => command,
    };

    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(e) => {
            let formatter = Formatter::new(OutputConfig {
                json: cli.json || cli.output == Some(OutputFormat::Json),
                no_color: cli.no_color,
                quiet: cli.quiet,
            });
            formatter.error(&format!("Failed to load config: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let output_config = OutputConfig {
        json: resolve_json(cli.json, cli.output, config.defaults.json()),
        no_color: cli.no_color || config.defaults.no_color(),
        quiet: cli.quiet,
    };
    if config.defaults.color == "always" && !output_config.no_color {
        console::set_colors_enabled(true);
        console::set_colors_enabled_stderr(true);
    }

    tracing::debug!(?command, "executing");

    match command {
        Commands::Inspect(args) => inspect::execute(args, output_config),
        Commands::Parts(args) => parts::execute(args, output_config),
        Commands::Parent(args) => parent::execute(args, output_config),
        Commands::Join(args) => join::execute(args, output_config),
        Commands::WithName(args) => with_name::execute(args, output_config),
        Commands::WithSuffix(args) => with_suffix::execute(args, output_config),
        Commands::Relative(args) => relative::execute(args, output_config),
        Commands::Completions(args) => completions::execute(args),
    }
}

/// Explicit flags win over the configured default
fn resolve_json(json_flag: bool, output: Option<OutputFormat>, config_json: bool) -> bool {
    match (json_flag, output) {
        (true, _) => true,
        (false, Some(format)) => format == OutputFormat::Json,
        (false, None) => config_json,
    }
}

/// Parse a URI argument, reporting failures through the formatter
pub(crate) fn parse_locator(uri: &str, formatter: &Formatter) -> Result<Locator, ExitCode> {
    Locator::parse(uri).map_err(|e| report(&e, formatter))
}

/// Print an error and map it to its exit code
pub(crate) fn report(error: &Error, formatter: &Formatter) -> ExitCode {
    formatter.error(&error.to_string());
    ExitCode::from_error(error)
}

/// Serialized form of a locator shared by all commands
#[derive(Debug, Serialize)]
pub(crate) struct LocatorOutput {
    uri: String,
    scheme: String,
    bucket: String,
    key: String,
    name: String,
    stem: String,
    suffix: String,
    suffixes: Vec<String>,
    parts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fragment: Option<String>,
}

impl From<&Locator> for LocatorOutput {
    fn from(locator: &Locator) -> Self {
        Self {
            uri: locator.to_string(),
            scheme: locator.scheme().to_string(),
            bucket: locator.bucket().to_string(),
            key: locator.key(),
            name: locator.name().to_string(),
            stem: locator.stem().to_string(),
            suffix: locator.suffix().to_string(),
            suffixes: locator.suffixes().into_iter().map(String::from).collect(),
            parts: locator.parts().to_vec(),
            query: locator.query().map(String::from),
            fragment: locator.fragment().map(String::from),
        }
    }
}

/// Human output of a transformed locator is just its URI
impl std::fmt::Display for LocatorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}
