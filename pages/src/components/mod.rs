//! Leptos components for the landing page and the success banner.
//!
//! # Component Hierarchy
//!
//! ```text
//! Document (static renders only)
//! ├── PageStylesheet (also rendered per route in the browser)
//! ├── LandingPage
//! │   ├── Nav
//! │   │   └── Subscribe
//! │   ├── Jumbotron
//! │   └── Description / Features / Rationale (per variant)
//! └── SuccessBannerPage
//!     └── BannerA | BannerB
//!         ├── TrackedAnchor
//!         └── Footer
//!             └── TrackedAnchor
//! ```
//!
//! Components that render tracked links (the banner and its footer) take a [`crate::tracking::Telemetry`]
//! prop; nothing is read from Leptos context.

mod banner;
mod document;
mod footer;
mod image;
mod landing;
mod stylesheet;
mod tracked_anchor;

pub use banner::{BannerA, BannerB, SuccessBannerPage};
pub use document::Document;
pub use footer::Footer;
pub use image::Image;
pub use landing::{Description, Features, Jumbotron, LandingPage, Nav, Rationale, Subscribe};
pub use stylesheet::PageStylesheet;
pub use tracked_anchor::TrackedAnchor;
