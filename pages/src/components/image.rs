//! Static images with an optional `@2x` source.

use leptos::prelude::*;

/// Prefix for everything under the static asset directory.
pub const STATIC_ROOT: &str = "/static/";

/// `pro/outline.png` -> `pro/outline@2x.png`
fn retina_path(src: &str) -> String {
    let file_start = src.rfind('/').map_or(0, |i| i + 1);
    match src[file_start..].rfind('.') {
        Some(dot) => {
            let dot = file_start + dot;
            format!("{}@2x{}", &src[..dot], &src[dot..])
        }
        None => format!("{src}@2x"),
    }
}

/// An image served from `/static/`.
///
/// With `retina` (the default) a `srcset` entry for the `@2x` file is added.
#[component]
pub fn Image(
    /// Path relative to the static root
    #[prop(into)]
    src: String,
    #[prop(default = "")]
    class: &'static str,
    #[prop(default = true)]
    retina: bool,
    #[prop(default = "")]
    alt: &'static str,
) -> impl IntoView {
    let srcset = retina.then(|| format!("{STATIC_ROOT}{} 2x", retina_path(&src)));
    let src = format!("{STATIC_ROOT}{src}");

    view! { <img class=class src=src srcset=srcset alt=alt /> }
}
