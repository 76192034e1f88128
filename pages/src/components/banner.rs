//! Post-flash success banner shown inside the desktop installer.

use leptos::prelude::*;

use super::{Footer, Image, TrackedAnchor};
use crate::context::PageContext;
use crate::tracking::{Telemetry, TrackedLink};
use crate::variant::{BannerKind, PageVariant};

/// Label shared by both banners' call to action.
pub const CTA_LABEL: &str = "successBanner pro";

fn cta(kind: BannerKind, campaign_url: &str, class: Option<String>) -> TrackedLink {
    let href = format!("{campaign_url}&utm_medium=vn{}", kind.tag());
    TrackedLink::button(CTA_LABEL, href, class).with_meta("vn", kind.tag())
}

/// Banner variant A: headline over the logo button and the product shot.
#[component]
pub fn BannerA(
    campaign_url: String,
    telemetry: Telemetry,
    etcher_version: Option<String>,
) -> impl IntoView {
    let discover = cta(BannerKind::A, &campaign_url, Some("variantA".into()));
    let footer_telemetry = telemetry.clone();

    view! {
        <main class="vertical center variantA">
            <div>
                <h1 class="variantA">"Ever wanted a duplicator as slick as Etcher?"</h1>
            </div>
            <div class="horizontal center grow">
                <div class="vertical center">
                    <TrackedAnchor link=discover telemetry=telemetry>
                        "Discover"
                        <Image class="icon" src="pro/logo-banner.svg" retina=false />
                    </TrackedAnchor>
                </div>
                <div class="vertical center">
                    <Image class="product-img" src="pro/outline.png" />
                </div>
            </div>
            <Footer telemetry=footer_telemetry etcher_version=etcher_version />
        </main>
    }
}

/// Banner variant B: product shot beside an "Introducing" headline.
///
/// Installers up to the legacy threshold get the old background colour.
#[component]
pub fn BannerB(
    campaign_url: String,
    legacy: bool,
    telemetry: Telemetry,
    etcher_version: Option<String>,
) -> impl IntoView {
    let discover = cta(BannerKind::B, &campaign_url, None);
    let footer_telemetry = telemetry.clone();
    let background = if legacy {
        "legacy-background-color"
    } else {
        "new-background-color"
    };

    view! {
        <main class=format!("vertical center {background}")>
            <div class="horizontal center grow">
                <div>
                    <Image class="product-img" src="pro/outline.png" />
                </div>
                <div class="ml-2 vertical center">
                    <h1>
                        "Introducing"
                        <Image class="icon etcherPro" src="pro/logo-banner.svg" retina=false />
                    </h1>
                    <TrackedAnchor link=discover telemetry=telemetry>
                        "Discover More"
                    </TrackedAnchor>
                </div>
            </div>
            <Footer telemetry=footer_telemetry etcher_version=etcher_version />
        </main>
    }
}

/// The success banner page body.
///
/// `variant` picks the banner; it is not read from the URL and defaults to
/// [`BannerKind::DEFAULT_VARIANT`].
#[component]
pub fn SuccessBannerPage(
    campaign_url: String,
    context: PageContext,
    telemetry: Telemetry,
    #[prop(default = PageVariant::new(BannerKind::DEFAULT_VARIANT))]
    variant: PageVariant,
) -> impl IntoView {
    let PageContext {
        legacy,
        etcher_version,
        ..
    } = context;

    match BannerKind::for_variant(&variant) {
        BannerKind::A => view! {
            <BannerA campaign_url=campaign_url telemetry=telemetry etcher_version=etcher_version />
        }
        .into_any(),
        BannerKind::B => view! {
            <BannerB
                campaign_url=campaign_url
                legacy=legacy
                telemetry=telemetry
                etcher_version=etcher_version
            />
        }
        .into_any(),
    }
}
