// Etcher Pro pages, browser build
// Mounts the landing page and the installer success banner.

mod browser;

use std::sync::Arc;

use browser::{BrowserLocation, ConsoleSink, DataLayerTracker};
use etcher_pages::Page;
use etcher_pages::components::{LandingPage, PageStylesheet, SuccessBannerPage};
use etcher_pages::config::SiteConfig;
use etcher_pages::context::PageContext;
use etcher_pages::event_log::{EventLogger, Location};
use etcher_pages::tracking::Telemetry;
use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::bundled() {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("etcher-pages: {err}")));
            return;
        }
    };
    browser::inject_tag_manager(&config.analytics.tag_manager_id);

    // Read once at mount. The installer reloads the page to change parameters.
    let context = PageContext::resolve(&BrowserLocation.query());
    let logger = EventLogger::new(Arc::new(BrowserLocation), Arc::new(ConsoleSink));
    let telemetry = Telemetry::new(Arc::new(DataLayerTracker), logger);

    leptos::mount::mount_to_body(move || {
        view! { <App config=config context=context telemetry=telemetry /> }
    });
}

#[component]
fn App(config: SiteConfig, context: PageContext, telemetry: Telemetry) -> impl IntoView {
    let landing = {
        let config = config.clone();
        let context = context.clone();
        move || {
            view! {
                <PageStylesheet page=Page::Landing />
                <LandingPage config=config.clone() context=context.clone() />
            }
        }
    };
    let landing_root = landing.clone();
    let banner = move || {
        view! {
            <PageStylesheet page=Page::SuccessBanner />
            <SuccessBannerPage
                campaign_url=config.campaign_url.clone()
                context=context.clone()
                telemetry=telemetry.clone()
            />
        }
    };

    view! {
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=landing_root />
                <Route path=StaticSegment(Page::Landing.segment()) view=landing />
                <Route path=StaticSegment(Page::SuccessBanner.segment()) view=banner />
            </Routes>
        </Router>
    }
}
