// src/lib.rs
pub mod app;
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::app::ArticleApp;
use crate::application::PageResetPolicy;
use crate::cli::args::Args;
use crate::infrastructure::config::Overrides;
use anyhow::Result;
use infrastructure::{Config, ContentRenderer, HttpArticleApi};
use ports::HtmlPresenter;
use tracing::{debug, info};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting articleview with arguments");

    // Initialize configuration
    let cli_overrides = Overrides {
        api_base_url: args.api_url.clone(),
        site_base_url: args.site_url.clone(),
    };
    let config = Config::discover(args.config.as_deref())?
        .resolve(Overrides::from_env().or(cli_overrides))?;
    debug!(?config, "Resolved configuration");

    // Initialize infrastructure
    let api = HttpArticleApi::new(&config.api.base_url, config.timeout(), &config.api.user_agent)?;

    // Initialize application
    let policy = if args.keep_page {
        PageResetPolicy::KeepPage
    } else {
        PageResetPolicy::ResetToFirstPage
    };
    let presenter = HtmlPresenter::with_link_base(&config.site.base_url);
    let app = ArticleApp::new(api, config.site_profile(), presenter).with_policy(policy);

    // Execute use case
    let route = args.command.route()?;
    info!(%route, "Opening route");

    if args.command.json() {
        println!("{}", app.to_json(&route).await?);
        return Ok(());
    }

    let page = app.render(&route, &mut rand::thread_rng()).await?;

    match &args.output {
        Some(path) => {
            ContentRenderer::write_file(path, &page.html)?;
            info!(?path, "Wrote page");
        }
        None => {
            let mut renderer = ContentRenderer::new();
            let temp_path = renderer.create_temp_file(&page.file_name, &page.html)?;
            renderer.open_in_browser(&temp_path)?;
        }
    }

    Ok(())
}
