use leptos::prelude::*;

use crate::tracking::{Telemetry, TrackedLink};

/// Outbound anchor that reports each click before the browser follows it.
///
/// The anchor's class is the link's type tag (`link`, `button <class>`).
#[component]
pub fn TrackedAnchor(link: TrackedLink, telemetry: Telemetry, children: Children) -> impl IntoView {
    let href = link.href.clone();
    let class = link.kind.type_tag();

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=class
            on:click=move |_| link.activate(&telemetry)
        >
            {children()}
        </a>
    }
}
