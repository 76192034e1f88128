//! Static HTML rendering of whole pages.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::{Document, LandingPage, SuccessBannerPage};
use crate::config::SiteConfig;
use crate::context::PageContext;
use crate::page::Page;
use crate::tracking::Telemetry;
use crate::variant::{BannerKind, PageVariant};

/// Render the landing page as a complete document.
///
/// ```rust
/// use etcher_pages::{render_landing, config::SiteConfig, context::PageContext, query::QueryParams};
///
/// let config = SiteConfig::bundled().unwrap();
/// let context = PageContext::resolve(&QueryParams::parse("vn=b"));
/// let html = render_landing(&config, &context);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("rationale"));
/// ```
pub fn render_landing(config: &SiteConfig, context: &PageContext) -> String {
    let title = config.title.clone();
    let tag_manager_id = config.analytics.tag_manager_id.clone();
    let config = config.clone();
    let context = context.clone();

    let doc = view! {
        <Document title=title tag_manager_id=tag_manager_id page=Page::Landing>
            <LandingPage config=config context=context />
        </Document>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render the success banner as a complete document.
///
/// `variant` overrides the banner flavour; `None` keeps the default.
pub fn render_success_banner(
    config: &SiteConfig,
    context: &PageContext,
    telemetry: &Telemetry,
    variant: Option<PageVariant>,
) -> String {
    let title = format!("{} banner", config.title);
    let tag_manager_id = config.analytics.tag_manager_id.clone();
    let campaign_url = config.campaign_url.clone();
    let context = context.clone();
    let telemetry = telemetry.clone();
    let variant = variant.unwrap_or_else(|| PageVariant::new(BannerKind::DEFAULT_VARIANT));

    let doc = view! {
        <Document title=title tag_manager_id=tag_manager_id page=Page::SuccessBanner>
            <SuccessBannerPage
                campaign_url=campaign_url
                context=context
                telemetry=telemetry
                variant=variant
            />
        </Document>
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render `page` for the given context.
pub fn render_page(
    page: Page,
    config: &SiteConfig,
    context: &PageContext,
    telemetry: &Telemetry,
) -> String {
    match page {
        Page::Landing => render_landing(config, context),
        Page::SuccessBanner => render_success_banner(config, context, telemetry, None),
    }
}
