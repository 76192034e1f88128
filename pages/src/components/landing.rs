//! Etcher Pro product landing page.

use leptos::prelude::*;

use super::Image;
use crate::config::{Feature, SiteConfig};
use crate::context::PageContext;
use crate::variant::{LandingLayout, LandingSection};

#[component]
pub fn Nav(children: Children) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">
                <Image class="logo" src="pro/logo.svg" retina=false alt="Etcher Pro" />
            </a>
            <div class="navbar-actions">{children()}</div>
        </nav>
    }
}

/// Mailing-list signup form posting straight to the list provider.
#[component]
pub fn Subscribe(#[prop(into)] action: String) -> impl IntoView {
    view! {
        <form class="subscribe" action=action method="post" target="_blank" novalidate=true>
            <input type="email" name="EMAIL" class="subscribe-email" placeholder="Email address" required=true />
            <button type="submit" class="subscribe-submit">"Keep me posted"</button>
        </form>
    }
}

#[component]
pub fn Jumbotron() -> impl IntoView {
    view! {
        <section class="jumbotron">
            <div class="jumbotron-text">
                <h1>"Etcher Pro"</h1>
                <p class="lead">"The duplicator that flashes like Etcher, without the computer."</p>
            </div>
            <Image class="product-img" src="pro/outline.png" alt="Etcher Pro" />
        </section>
    }
}

#[component]
pub fn Description() -> impl IntoView {
    view! {
        <section class="description">
            <h2>"Flashing, at scale"</h2>
            <p>
                "Etcher Pro is a standalone duplicator for USB drives and SD cards. "
                "It brings the simplicity of Etcher to production lines, classrooms and labs."
            </p>
        </section>
    }
}

#[component]
pub fn Features(#[prop(default = 3)] cols: usize, features: Vec<Feature>) -> impl IntoView {
    let grid_class = format!("features cols-{cols}");
    let tiles = features
        .into_iter()
        .map(|feature| {
            let icon = feature
                .icon
                .map(|src| view! { <Image class="feature-icon" src=src retina=false /> });
            view! {
                <div class="feature">
                    {icon}
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <section class=grid_class>{tiles}</section> }
}

#[component]
pub fn Rationale() -> impl IntoView {
    view! {
        <section class="rationale">
            <h2>"Why we built it"</h2>
            <p>
                "Millions of people flash with Etcher every month. "
                "Many of them write the same image to dozens of cards, one at a time. "
                "Etcher Pro does all of them at once."
            </p>
        </section>
    }
}

/// The landing page body, arranged for the page's variant.
#[component]
pub fn LandingPage(config: SiteConfig, context: PageContext) -> impl IntoView {
    let layout = LandingLayout::for_variant(&context.variant);

    let SiteConfig {
        pro_mailchimp_list,
        pro_features,
        ..
    } = config;

    let sections = layout
        .sections()
        .into_iter()
        .map(|section| match section {
            LandingSection::Description => view! { <Description /> }.into_any(),
            LandingSection::Features => {
                view! { <Features cols=2 features=pro_features.clone() /> }.into_any()
            }
            LandingSection::Rationale => view! { <Rationale /> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="pro">
            <Nav>
                <Subscribe action=pro_mailchimp_list />
            </Nav>
            <Jumbotron />
            {sections}
        </div>
    }
}
