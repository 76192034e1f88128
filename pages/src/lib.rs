//! # etcher-pages
//!
//! Leptos pages for the Etcher Pro marketing site: the product landing page
//! and the success banner the Etcher installer shows after a flash.
//!
//! ## What lives here
//!
//! - [`query`] - URL query-string parsing
//! - [`variant`] - A/B variant (`vn`) resolution and layout dispatch
//! - [`version`] - installer version parsing and the legacy-style gate
//! - [`event_log`] - `Banner ...` log lines for the host installer
//! - [`tracking`] - analytics for outbound links
//! - [`context`] - per-page-view state, read once at mount
//! - [`config`] - site configuration (analytics IDs, URLs, copy)
//! - [`tag_manager`] - Google Tag Manager snippets
//! - [`components`] - Leptos UI components
//!
//! With the `ssr` feature (default) whole pages render to static HTML:
//!
//! ```rust
//! use etcher_pages::{render_success_banner, config::SiteConfig, context::PageContext};
//! use etcher_pages::{query::QueryParams, tracking::Telemetry};
//!
//! let config = SiteConfig::bundled().unwrap();
//! let context = PageContext::resolve(&QueryParams::parse("etcher-version=1.4.5"));
//! let html = render_success_banner(&config, &context, &Telemetry::detached(), None);
//! assert!(html.contains("new-background-color"));
//! ```
//!
//! The browser build (`etcher-landing`) disables `ssr`, enables `csr` and
//! mounts the same components.

pub mod components;
pub mod config;
pub mod context;
pub mod event_log;
pub mod page;
pub mod query;
pub mod tag_manager;
pub mod tracking;
pub mod variant;
pub mod version;

#[cfg(feature = "ssr")]
mod render;

#[cfg(feature = "ssr")]
pub use render::{render_landing, render_page, render_success_banner};

pub use page::Page;
