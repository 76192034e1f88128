use leptos::prelude::*;

use crate::page::Page;

/// `<link>` to the stylesheet of `page`.
///
/// Static renders put it in `<head>`; the browser build renders it with each
/// route so the sheet follows the mounted page.
#[component]
pub fn PageStylesheet(page: Page) -> impl IntoView {
    let href = page.stylesheet();
    view! { <link rel="stylesheet" type="text/css" href=href /> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(page: Page) -> String {
        view! { <PageStylesheet page=page /> }.to_html()
    }

    #[test]
    fn banner_route_links_banner_sheet() {
        let html = render(Page::SuccessBanner);
        assert!(html.contains(r#"href="/static/success-banner.css?v=1.0.1""#), "{html}");
        assert!(!html.contains("pro.css"));
    }

    #[test]
    fn landing_route_links_landing_sheet() {
        let html = render(Page::Landing);
        assert!(html.contains(r#"href="/static/pro.css?v=1.0.1""#), "{html}");
        assert!(html.contains(r#"rel="stylesheet""#));
    }
}
