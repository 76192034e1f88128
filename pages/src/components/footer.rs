use leptos::prelude::*;

use super::TrackedAnchor;
use crate::tracking::{Telemetry, TrackedLink};

pub const COMPANY_URL: &str = "https://resin.io/";
pub const CHANGELOG_URL: &str = "https://github.com/resin-io/etcher/blob/master/CHANGELOG.md";

#[component]
pub fn Footer(telemetry: Telemetry, etcher_version: Option<String>) -> impl IntoView {
    let company = TrackedLink::link("Resin", COMPANY_URL);
    let changelog = TrackedLink::link("Version", CHANGELOG_URL);
    let company_telemetry = telemetry.clone();
    let version = etcher_version.unwrap_or_default();

    view! {
        <footer>
            "made with"
            <img class="icon" src="/static/love.svg" alt="love" />
            "by"
            <TrackedAnchor link=company telemetry=company_telemetry>
                <img class="brand" src="/static/resin.png" alt="resin.io" />
            </TrackedAnchor>
            <TrackedAnchor link=changelog telemetry=telemetry>
                <span class="version">{version}</span>
            </TrackedAnchor>
        </footer>
    }
}
