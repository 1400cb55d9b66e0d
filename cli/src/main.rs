use std::path::{Path, PathBuf};

use clap::Parser;
use command_options_core::{AliasTable, Configuration, parse_with_aliases, validate_aliases};
use tracing_subscriber::{EnvFilter, fmt};

/// Output format for the parsed configuration.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "parse-options")]
#[command(version, about = "Parse command-line tokens into arguments and options")]
struct Cli {
    /// Inline alias definition (e.g. t=trythisone). May be repeated.
    #[arg(long = "alias", value_name = "SHORT=LONG")]
    alias: Vec<String>,
    /// YAML or JSON file mapping abbreviated names to canonical names.
    #[arg(long = "aliases", value_name = "FILE")]
    alias_file: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
    /// Fail instead of warning when an alias can never match.
    #[arg(long)]
    strict_aliases: bool,
    /// Tokens to parse, given after `--`.
    #[arg(last = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let aliases = build_alias_table(cli.alias_file.as_deref(), &cli.alias)?;
    check_aliases(&aliases, cli.strict_aliases)?;

    tracing::debug!(tokens = cli.tokens.len(), aliases = aliases.len(), "parsing tokens");
    let config = parse_with_aliases(&cli.tokens, &aliases);

    let rendered = format_configuration(&config, cli.format)?;
    println!("{rendered}");
    Ok(())
}

fn build_alias_table(file: Option<&Path>, inline: &[String]) -> Result<AliasTable, String> {
    let mut aliases = match file {
        Some(path) => AliasTable::load(path)
            .map_err(|e| format!("failed to load aliases from {}: {e}", path.display()))?,
        None => AliasTable::new(),
    };

    for definition in inline {
        let (short, long) = AliasTable::parse_pair(definition).map_err(|e| e.to_string())?;
        if let Some(previous) = aliases.insert(short.as_str(), long.as_str()) {
            tracing::debug!(alias = %short, %previous, canonical = %long, "inline alias overrides file entry");
        }
    }

    Ok(aliases)
}

fn check_aliases(aliases: &AliasTable, strict: bool) -> Result<(), String> {
    let findings = validate_aliases(aliases);
    if findings.is_empty() {
        return Ok(());
    }

    if strict {
        let messages: Vec<String> = findings.iter().map(ToString::to_string).collect();
        return Err(format!("invalid aliases: {}", messages.join("; ")));
    }

    for finding in &findings {
        tracing::warn!("{finding}");
    }
    Ok(())
}

fn format_configuration(config: &Configuration, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
