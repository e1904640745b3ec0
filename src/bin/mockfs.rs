use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use map_fixture_mock::resolver::{match_url, RULES};
use map_fixture_mock::{FixtureKey, FixtureResolver, FixtureSet, MockConfig};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "mockfs",
    about = "Inspect map renderer test fixtures and the URLs they answer"
)]
struct Cli {
    /// Override directory containing fixture files (defaults to fixtures/resources)
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a request URL to a fixture; omit the URL to resolve an absent one
    Resolve {
        url: Option<String>,
        /// Exit with code 2 when no fixture matches
        #[arg(long)]
        strict: bool,
    },
    /// List fixture files and their sizes
    DumpFixtures,
    /// Print the matching rules in evaluation order
    Rules,
    /// Write a fixture's raw bytes to stdout
    Cat { key: FixtureKey },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    map_fixture_mock::init_logging(if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    });

    let mut config = cli
        .config
        .map(MockConfig::load_from_file)
        .unwrap_or_default();
    if let Some(dir) = cli.fixtures_dir {
        config.fixture_root = dir;
    }

    match cli.command {
        Commands::Resolve { url, strict } => run_resolve(&config, url.as_deref(), strict),
        Commands::DumpFixtures => run_dump(&config),
        Commands::Rules => run_rules(),
        Commands::Cat { key } => run_cat(&config, key),
    }
}

fn load_resolver(config: &MockConfig) -> Result<FixtureResolver> {
    let set = FixtureSet::load(config)
        .with_context(|| format!("loading fixtures from {}", config.fixture_root.display()))?;
    Ok(FixtureResolver::new(set))
}

fn run_resolve(config: &MockConfig, url: Option<&str>, strict: bool) -> Result<ExitCode> {
    let resolver = load_resolver(config)?;
    let resolution = resolver.resolve_url(url);

    let report = ResolveReport {
        url,
        fixture: resolution.key(),
        rule: url.and_then(match_url).map(|rule| rule.name),
        bytes: resolution.data().map(<[u8]>::len),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if strict && !resolution.is_fixture() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::from(0))
    }
}

fn run_dump(config: &MockConfig) -> Result<ExitCode> {
    let resolver = load_resolver(config)?;
    for (key, data) in resolver.fixtures().iter() {
        println!(
            "{} -> {} ({} bytes)",
            key,
            config.path_for(key).display(),
            data.len()
        );
    }
    Ok(ExitCode::from(0))
}

fn run_rules() -> Result<ExitCode> {
    for (position, rule) in RULES.iter().enumerate() {
        println!(
            "{}. {} -> {} {}",
            position + 1,
            rule.name,
            rule.key,
            serde_json::to_string(&rule.matcher)?
        );
    }
    Ok(ExitCode::from(0))
}

fn run_cat(config: &MockConfig, key: FixtureKey) -> Result<ExitCode> {
    let resolver = load_resolver(config)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(resolver.fixtures().get(key))
        .with_context(|| format!("writing {key} to stdout"))?;
    stdout.flush()?;
    Ok(ExitCode::from(0))
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    url: Option<&'a str>,
    fixture: Option<FixtureKey>,
    rule: Option<&'static str>,
    bytes: Option<usize>,
}
