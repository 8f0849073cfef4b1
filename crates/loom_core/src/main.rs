use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use loom_core::{
    parse_account_file, parse_proxy_file, AuthMethod, Config, ContentStudio, LoomError,
};

#[derive(Parser)]
#[command(name = "loom", version, about = "Campaign content & import processing toolkit")]
struct Cli {
    /// Optional JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit results as JSON instead of a human-readable summary.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand a spintax template into independent variations.
    Spin {
        /// Template text, e.g. "{Hi|Hello} {friend|there}".
        template: String,
        /// Number of variations (defaults to the configured count).
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Parse a pipe-delimited account export and print an import summary.
    Accounts { file: PathBuf },
    /// Parse a proxy list and print an import summary.
    Proxies { file: PathBuf },
}

fn read_input(path: &Path) -> Result<String, LoomError> {
    fs::read_to_string(path).map_err(|source| LoomError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn run_spin(config: &Config, json: bool, template: &str, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(config.default_variations);
    let mut studio = ContentStudio::new();
    let variations = studio.render_many(template, count);

    if json {
        println!("{}", serde_json::to_string_pretty(&variations)?);
    } else {
        for (i, variation) in variations.iter().enumerate() {
            println!("{:>3}. {}", i + 1, variation);
        }
    }
    tracing::info!(count = variations.len(), "generated variations");
    Ok(())
}

fn run_accounts(json: bool, file: &Path) -> Result<()> {
    let content = read_input(file)?;
    let import = parse_account_file(&content);

    if json {
        println!("{}", serde_json::to_string_pretty(&import)?);
        return Ok(());
    }

    let with_2fa = import
        .records
        .iter()
        .filter(|r| !r.two_factor_key.trim().is_empty())
        .count();
    let by_method = |method: AuthMethod| {
        import
            .records
            .iter()
            .filter(|r| r.auth_method() == method)
            .count()
    };

    println!("Accounts: {} lines", import.total_lines);
    println!("  valid:      {}", import.valid_count);
    println!("  invalid:    {}", import.invalid_count);
    println!("  duplicates: {}", import.duplicate_count);
    println!("  with 2FA:   {with_2fa}");
    println!(
        "  methods:    cookies={} token={} email={}",
        by_method(AuthMethod::Cookies),
        by_method(AuthMethod::Token),
        by_method(AuthMethod::Email),
    );
    Ok(())
}

fn run_proxies(json: bool, file: &Path) -> Result<()> {
    let content = read_input(file)?;
    let import = parse_proxy_file(&content);

    if json {
        println!("{}", serde_json::to_string_pretty(&import)?);
        return Ok(());
    }

    println!("Proxies: {} lines", import.total_lines);
    println!("  valid:      {}", import.valid_count);
    println!("  invalid:    {}", import.invalid_count);
    println!("  duplicates: {}", import.duplicate_count);
    for record in &import.records {
        println!("  {}", record.url());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Results go to stdout; logs stay on stderr.
    let default_filter = if config.log_invalid_lines {
        "info,mod_import=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match &cli.command {
        Command::Spin { template, count } => run_spin(&config, cli.json, template, *count),
        Command::Accounts { file } => run_accounts(cli.json, file),
        Command::Proxies { file } => run_proxies(cli.json, file),
    }
}
