// src/cli/args.rs
use crate::domain::{DomainError, ListFilter, PageSize, Route};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the content API (overrides config and ARTICLEVIEW_API_BASE_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Public site base URL used for canonical and share links
    #[arg(long, value_name = "URL", global = true)]
    pub site_url: Option<String>,

    /// Path to TOML config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Write the page to this file instead of opening it in the browser
    #[arg(short, long, value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    /// Keep the page number when the tag filter or page size changes
    #[arg(long, global = true)]
    pub keep_page: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, view, tags, or open)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List articles, optionally filtered by tag
    List {
        /// Only show articles with this tag
        #[arg(short, long, value_name = "TAG")]
        tag: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Articles per page (5, 10, 15 or 20)
        #[arg(long, default_value_t = 5, value_parser = parse_page_size)]
        per_page: u32,

        /// Output articles as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// View an article in the browser
    View {
        /// Article ID to view
        #[arg(value_name = "ARTICLE_ID", value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,

        /// Output article as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Show all tags
    Tags {
        /// Output tags as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Open a route such as "/articles?tag=rust" or "/article/42"
    Open {
        /// Route path with optional query
        #[arg(value_name = "ROUTE")]
        route: String,

        /// Output data as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Screen addressed by this command
    pub fn route(&self) -> Result<Route, DomainError> {
        match self {
            Command::List {
                tag,
                page,
                per_page,
                ..
            } => Ok(Route::Articles(ListFilter {
                page: *page,
                per_page: PageSize::new(*per_page)?,
                tag: tag.as_deref().unwrap_or_default().trim().to_string(),
            })),
            Command::View { id, .. } => Ok(Route::Article(*id)),
            Command::Tags { .. } => Ok(Route::Tags),
            Command::Open { route, .. } => Route::parse(route),
        }
    }

    pub fn json(&self) -> bool {
        match self {
            Command::List { json, .. }
            | Command::View { json, .. }
            | Command::Tags { json }
            | Command::Open { json, .. } => *json,
        }
    }
}

fn parse_page_size(value: &str) -> Result<u32, String> {
    let size: u32 = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
    PageSize::new(size).map(PageSize::get).map_err(|e| e.to_string())
}
