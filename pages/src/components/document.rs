//! HTML shell for static renders, with the tag manager wired in.

use leptos::prelude::*;

use super::PageStylesheet;
use crate::page::Page;
use crate::tag_manager;

#[component]
pub fn Document(
    #[prop(into)] title: String,
    #[prop(into)] tag_manager_id: String,
    /// Page whose stylesheet goes in `<head>`
    page: Page,
    children: Children,
) -> impl IntoView {
    let loader = tag_manager::head_script(&tag_manager_id);
    let fallback = tag_manager::noscript(&tag_manager_id);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <script inner_html=loader></script>
                <PageStylesheet page=page />
            </head>
            <body>
                <noscript inner_html=fallback></noscript>
                {children()}
            </body>
        </html>
    }
}
