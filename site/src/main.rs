//! # etcher-site
//!
//! Renders an Etcher Pro page to static HTML, as it would look for a given
//! query string.
//!
//! ```bash
//! etcher-site pro --query "vn=b" --out dist/pro/index.html
//! etcher-site success-banner --query "etcher-version=1.4.5&api-version=1"
//! ```
//!
//! Logs go to stderr; the page goes to `--out` or stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use etcher_pages::config::SiteConfig;
use etcher_pages::context::PageContext;
use etcher_pages::query::QueryParams;
use etcher_pages::tracking::Telemetry;
use etcher_pages::variant::PageVariant;
use etcher_pages::{Page, render_landing, render_success_banner};

#[derive(Parser, Debug)]
#[command(name = "etcher-site")]
#[command(about = "Render the Etcher Pro pages to static HTML")]
#[command(version)]
struct Args {
    /// Page to render (`pro` or `success-banner`)
    page: Page,

    /// Query string the page is rendered for, e.g. `vn=b&etcher-version=1.4.5`
    #[arg(short, long, default_value = "")]
    query: String,

    /// Site config JSON (defaults to the bundled config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Banner variant for `success-banner` (defaults to `b`)
    #[arg(long)]
    banner_variant: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading site config from {}", path.display())),
        None => SiteConfig::bundled().context("loading bundled site config"),
    }
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs MUST go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = load_config(args.config.as_deref())?;
    debug!(title = %config.title, features = config.pro_features.len(), "config loaded");

    let context = PageContext::resolve(&QueryParams::parse(&args.query));
    // Nothing is clicked during a static render.
    let telemetry = Telemetry::detached();

    let html = match args.page {
        Page::Landing => {
            if args.banner_variant.is_some() {
                warn!("--banner-variant only applies to success-banner, ignoring");
            }
            render_landing(&config, &context)
        }
        Page::SuccessBanner => {
            let variant = args.banner_variant.map(PageVariant::new);
            render_success_banner(&config, &context, &telemetry, variant)
        }
    };

    match &args.out {
        Some(path) => {
            write_output(path, &html)?;
            info!(page = %args.page, path = %path.display(), bytes = html.len(), "page written");
        }
        None => {
            io::stdout()
                .write_all(html.as_bytes())
                .context("writing page to stdout")?;
        }
    }

    Ok(())
}
