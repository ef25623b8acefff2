//! Command-line host for the content template.
//!
//! Drives an extension through the same provider traits a host application
//! would call, and prints each response as JSON on stdout. Logs go to stderr.

mod error;

use crate::error::{ErrorKind, Result};
use clap::{Parser, Subcommand, ValueEnum};
use exn::ResultExt;
use inkdex_config::Config;
use inkdex_extension::models::{Chapter, DiscoverSection, DiscoverSectionType, FilterValue, SearchQuery};
use inkdex_extension::{
    ChapterProviding, DiscoverSectionProviding, Extension, ExtensionHandle, ExtensionInfo, MangaProviding,
    SEARCH_FILTER_ID, SearchResultsProviding, SettingsFormProviding,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl LogLevel {
    fn as_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Filter {
    Include,
    Exclude,
}
impl From<Filter> for FilterValue {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Include => FilterValue::Include,
            Filter::Exclude => FilterValue::Exclude,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "inkdex", about = "Browse the content template's catalog", version)]
struct Cli {
    /// Configuration file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog data file, overriding the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Log verbosity; `RUST_LOG` takes precedence when set
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the extension's packaging metadata
    Info,
    /// Show the settings form
    Form,
    /// List the discover sections
    Sections,
    /// List the items of a discover section
    Items {
        /// Section id (e.g. `discover-section-template1`, or `1`)
        section: String,
        #[arg(long)]
        cursor: Option<u32>,
    },
    /// List the available search filters
    Filters,
    /// Search titles
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = Filter::Exclude)]
        filter: Filter,
    },
    /// Show a title's details
    Details { id: String },
    /// List a title's chapters
    Chapters { id: String },
    /// List a chapter's pages
    Pages { id: String, chapter: String },
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}

fn print(value: &impl Serialize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).or_raise(|| ErrorKind::Output)?;
    writeln!(stdout).or_raise(|| ErrorKind::Output)
}

fn config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Startup)?;
    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    Ok(config)
}

fn extension(config: &Config) -> Result<ExtensionHandle> {
    let extension = config.extension().or_raise(|| ErrorKind::Startup)?;
    tracing::info!(titles = extension.catalog().len(), "Catalog loaded");
    Ok(Arc::new(extension))
}

async fn run(cli: Cli) -> Result<()> {
    let extension = extension(&config(&cli)?)?;
    extension.initialise().await;

    match cli.command {
        Command::Info => print(&ExtensionInfo::template()),
        Command::Form => print(&extension.get_settings_form().await),
        Command::Sections => print(&extension.get_discover_sections().await),
        Command::Items { section, cursor } => {
            // Unlisted ids are passed through; the extension decides what they mean.
            let section = extension
                .get_discover_sections()
                .await
                .into_iter()
                .find(|listed| listed.id == section)
                .unwrap_or_else(|| DiscoverSection::new(section.clone(), section, DiscoverSectionType::SimpleCarousel));
            print(&extension.get_discover_section_items(&section, cursor).await)
        },
        Command::Filters => print(&extension.get_search_filters().await),
        Command::Search { query, filter } => {
            let query = SearchQuery::new(query).with_filter(SEARCH_FILTER_ID, FilterValue::from(filter));
            print(&extension.get_search_results(&query, None).await)
        },
        Command::Details { id } => {
            let manga = extension.get_manga_details(&id).await.or_raise(|| ErrorKind::Request)?;
            print(&manga)
        },
        Command::Chapters { id } => {
            let manga = extension.get_manga_details(&id).await.or_raise(|| ErrorKind::Request)?;
            let chapters = extension.get_chapters(&manga, None).await.or_raise(|| ErrorKind::Request)?;
            print(&chapters)
        },
        Command::Pages { id, chapter } => {
            let details = extension
                .get_chapter_details(&Chapter::reference(id, chapter))
                .await
                .or_raise(|| ErrorKind::Request)?;
            print(&details)
        },
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
