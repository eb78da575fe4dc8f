//! itemlist CLI - drives the list screens and the reconciler from the shell.
//!
//! # Commands
//!
//! ```text
//! itemlist diff OLD.json NEW.json [--force]   print the transition as JSON
//! itemlist languages [--active CODE]          run the language list feed
//! itemlist discover | helper                  render the fixed screens
//! itemlist set-theme NAME                     persist [app].theme
//! ```
//!
//! Screens are rendered through the same controller a UI would use: one
//! snapshot per upstream change, reconciled against the previous one and
//! applied to a display list once a layout is known.

mod snapshot;

use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use itemlist_config::ItemListConfig;
use itemlist_core::{
    ContainerLayout, LanguageInteraction, LanguageSources, ListController, LocalizationListState,
    LocalizationSettings, LocalizationView, discover_entries, helper_entries, reconcile,
    run_language_feed, run_presentation_feed,
};
use itemlist_types::{ItemListEntry, ListRow, PresentationData, RowStyle};

use crate::snapshot::read_snapshot;

#[derive(Parser)]
#[command(name = "itemlist")]
#[command(about = "Reconcile ordered lists and render settings screens")]
struct Cli {
    /// Config file (default: ~/.itemlist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print rows as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transition between two JSON snapshots
    Diff {
        old: PathBuf,
        new: PathBuf,
        /// Mark every surviving row as updated
        #[arg(long)]
        force: bool,
    },
    /// Render the language list
    Languages {
        /// Language code currently in use
        #[arg(long)]
        active: Option<String>,
        /// Language code being downloaded
        #[arg(long)]
        applying: Option<String>,
        /// Show the list as it looks before the server responds
        #[arg(long)]
        offline: bool,
    },
    /// Render the Discover screen
    Discover,
    /// Render the Help screen
    Helper,
    /// Persist the theme name to the config file
    SetTheme { name: String },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ItemListConfig> {
    let loaded = match path {
        Some(path) => ItemListConfig::load_from(path)?,
        None => ItemListConfig::load()?,
    };
    if loaded.is_none() {
        tracing::debug!("No config file, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn default_layout() -> ContainerLayout {
    ContainerLayout {
        width: 80,
        height: 24,
        top_inset: 0,
    }
}

fn laid_out<E: ItemListEntry>(config: &ItemListConfig) -> Result<ListController<E>> {
    let mut controller = ListController::new().with_reduced_motion(config.reduced_motion());
    controller.container_layout_updated(default_layout())?;
    Ok(controller)
}

fn print_rows(rows: &[ListRow], json: bool) -> Result<()> {
    let mut out = stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, rows)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut section = None;
    for row in rows {
        if section.is_some() && section != Some(row.section) {
            writeln!(out)?;
        }
        section = Some(row.section);

        let mut line = match row.style {
            RowStyle::Text => format!("  {}", row.title),
            RowStyle::Disclosure => format!("{} >", row.title),
            RowStyle::Check => {
                let mark = if row.checked { "[x]" } else { "[ ]" };
                format!("{mark} {}", row.title)
            }
        };
        if let Some(subtitle) = &row.subtitle {
            line.push_str(" - ");
            line.push_str(subtitle);
        }
        if row.activity {
            line.push_str(" ...");
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn run_diff(old: &Path, new: &Path, force: bool) -> Result<()> {
    let old_rows = read_snapshot(old)?;
    let new_rows = read_snapshot(new)?;
    let transition = reconcile(&old_rows, &new_rows, force);

    let mut out = stdout().lock();
    serde_json::to_writer_pretty(&mut out, &transition)?;
    writeln!(out)?;
    Ok(())
}

async fn run_languages(
    config: &ItemListConfig,
    active: Option<String>,
    applying: Option<String>,
    offline: bool,
    json: bool,
) -> Result<()> {
    let list = if offline {
        LocalizationListState::default()
    } else {
        LocalizationListState {
            available_official: config.catalog().into_iter().map(|info| info.code).collect(),
        }
    };
    let view = LocalizationView {
        list,
        settings: LocalizationSettings {
            primary_language_code: active,
        },
    };
    let interaction = LanguageInteraction {
        applying_code: applying,
        ..LanguageInteraction::default()
    };

    // Single-shot sources: the senders close right away, so the feed
    // delivers exactly one snapshot.
    let (_, localization) = watch::channel(view);
    let (_, presentation) = watch::channel(config.presentation());
    let (_, interaction) = watch::channel(interaction);

    let mut controller = laid_out(config)?;
    let sources = LanguageSources {
        localization,
        presentation,
        interaction,
    };
    run_language_feed(&config.catalog(), sources, &mut controller)
        .await
        .context("language list feed failed")?;

    if controller.shows_activity_indicator() && !json {
        println!("Loading...");
        return Ok(());
    }
    print_rows(controller.rows(), json)
}

async fn run_fixed_screen<E, F>(config: &ItemListConfig, build: F, json: bool) -> Result<()>
where
    E: ItemListEntry,
    F: FnMut(&PresentationData) -> Vec<E>,
{
    let (_, presentation) = watch::channel(config.presentation());
    let mut controller = laid_out(config)?;
    run_presentation_feed(presentation, build, &mut controller)
        .await
        .context("screen feed failed")?;
    print_rows(controller.rows(), json)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Diff { old, new, force } => run_diff(&old, &new, force),
        Commands::Languages {
            active,
            applying,
            offline,
        } => {
            let config = load_config(cli.config.as_deref())?;
            run_languages(&config, active, applying, offline, cli.json).await
        }
        Commands::Discover => {
            let config = load_config(cli.config.as_deref())?;
            run_fixed_screen(&config, |data| discover_entries(&data.strings), cli.json).await
        }
        Commands::Helper => {
            let config = load_config(cli.config.as_deref())?;
            run_fixed_screen(&config, |data| helper_entries(&data.strings), cli.json).await
        }
        Commands::SetTheme { name } => {
            match cli.config.as_deref() {
                Some(path) => ItemListConfig::persist_theme_to(path, &name)?,
                None => ItemListConfig::persist_theme(&name)?,
            }
            Ok(())
        }
    }
}
