use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::catalog::Catalog;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod script;
mod settings;

use script::{parse_script, ScriptRunner};
use settings::load_settings;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "panel.toml")]
    settings: PathBuf,
    /// Catalog file (TOML or JSON); overrides `catalog_path` from settings.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON array of steps; reads stdin when no file is given.
    Run {
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Print the effective catalog as TOML.
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli.settings);

    let catalog_path = cli
        .catalog
        .or_else(|| settings.catalog_path.as_ref().map(PathBuf::from));
    let catalog = match catalog_path {
        Some(path) => load_catalog(&path).await?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Command::Catalog => {
            print!("{}", toml::to_string_pretty(&catalog)?);
        }
        Command::Run { script } => {
            let raw = match script {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read script '{}'", path.display()))?,
                None => {
                    let mut raw = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut raw)
                        .await
                        .context("failed to read script from stdin")?;
                    raw
                }
            };
            let steps = parse_script(&raw).context("malformed script")?;
            info!(steps = steps.len(), policy = ?settings.toggle_policy, "replaying script");

            let mut runner = ScriptRunner::new(catalog, &settings)?;
            for report in runner.run(steps) {
                println!("{}", serde_json::to_string(&report)?);
            }
            println!("{}", serde_json::to_string(&runner.snapshot())?);
        }
    }

    Ok(())
}

async fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read catalog '{}'", path.display()))?;

    let catalog: Catalog = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid catalog json '{}'", path.display()))?
    } else {
        toml::from_str(&raw).with_context(|| format!("invalid catalog toml '{}'", path.display()))?
    };

    catalog
        .validate()
        .with_context(|| format!("catalog '{}' is inconsistent", path.display()))?;
    Ok(catalog)
}
