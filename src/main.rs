use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod app;
mod config;
mod export;
mod logging;
mod ui;
mod wizard;

use app::App;
use config::Config;
use export::{write_artifact, DeckExporter, OutlineExporter};
use wizard::{DeckTemplate, PitchDraft, StepId};

#[derive(Parser)]
#[command(name = "pitchdeck")]
#[command(about = "Step-by-step pitch deck builder for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Draft file to resume and save to (.toml, .json or .yaml)
    #[arg(long)]
    draft: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the effective configuration to .pitchdeck/config.toml
    Init {
        /// Overwrite an existing project config
        #[arg(short, long)]
        force: bool,
    },

    /// List the wizard steps and the fields each one requires
    Steps,

    /// List the available deck templates
    Templates,

    /// Report which steps of a draft are complete
    Check {
        /// Draft file to check
        #[arg(long)]
        draft: PathBuf,
    },

    /// Export a finished draft without opening the wizard
    Export {
        /// Draft file to export
        #[arg(long)]
        draft: PathBuf,

        /// Output directory (default: paths.output from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // No subcommand = interactive wizard
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Init { force }) => cmd_init(&config, force)?,
        Some(Commands::Steps) => cmd_steps(),
        Some(Commands::Templates) => cmd_templates(&config),
        Some(Commands::Check { draft }) => cmd_check(&draft)?,
        Some(Commands::Export { draft, output }) => cmd_export(&config, &draft, output).await?,
        None => {
            run_tui(config, cli.draft, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(
    config: Config,
    draft: Option<PathBuf>,
    log_file_path: Option<PathBuf>,
) -> Result<()> {
    let mut app = App::new(config, draft)?;
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

fn cmd_init(config: &Config, force: bool) -> Result<()> {
    let path = Config::project_config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config.save()?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_steps() {
    println!("Wizard Steps ({})", StepId::all().len());
    println!("{}", "─".repeat(60));

    for (i, id) in StepId::all().iter().enumerate() {
        let required: Vec<&str> = id.gate().required().iter().map(|f| f.label()).collect();
        let required = if required.is_empty() {
            "nothing".to_string()
        } else {
            required.join(", ")
        };
        println!("{}. {:<20} requires: {}", i + 1, id.title(), required);
    }
}

fn cmd_templates(config: &Config) {
    println!("Deck Templates");
    println!("{}", "─".repeat(60));

    for template in DeckTemplate::all() {
        let mut tags = Vec::new();
        if template.recommended {
            tags.push("recommended");
        }
        if template.id == config.wizard.default_template {
            tags.push("default");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        };

        println!("{:<16} {}{}", template.id, template.name, tags);
        println!("{:<16} {}", "", template.description);
    }
}

fn cmd_check(draft_path: &Path) -> Result<()> {
    let draft = PitchDraft::load(draft_path)?;
    let mut incomplete = 0;

    println!("Draft: {}", draft_path.display());
    println!("{}", "─".repeat(60));

    for id in StepId::all() {
        match id.gate().hint(&draft) {
            None => println!("✓ {}", id.title()),
            Some(hint) => {
                incomplete += 1;
                println!("✗ {:<20} {}", id.title(), hint);
            }
        }
    }

    if incomplete > 0 {
        bail!("{} step(s) incomplete", incomplete);
    }

    println!();
    println!("Ready to export");
    Ok(())
}

async fn cmd_export(config: &Config, draft_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let draft = PitchDraft::load(draft_path)?;
    let artifact = OutlineExporter::new().export(&draft)?;

    let dir = output.unwrap_or_else(|| config.output_path());
    let path = write_artifact(&dir, &artifact).await?;

    println!("Pitch deck written to {}", path.display());
    Ok(())
}
