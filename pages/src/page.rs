//! The site's routes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page `{0}` (expected `pro` or `success-banner`)")]
pub struct UnknownPage(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Etcher Pro landing page.
    Landing,
    /// Banner shown by the installer after a successful flash.
    SuccessBanner,
}

impl Page {
    /// URL path segment.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Landing => "pro",
            Self::SuccessBanner => "success-banner",
        }
    }

    pub const fn stylesheet(self) -> &'static str {
        match self {
            Self::Landing => "/static/pro.css?v=1.0.1",
            Self::SuccessBanner => "/static/success-banner.css?v=1.0.1",
        }
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('/') {
            "pro" | "landing" | "" => Ok(Self::Landing),
            "success-banner" => Ok(Self::SuccessBanner),
            other => Err(UnknownPage(other.to_owned())),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_paths() {
        assert_eq!("pro".parse::<Page>(), Ok(Page::Landing));
        assert_eq!("/pro/".parse::<Page>(), Ok(Page::Landing));
        assert_eq!("landing".parse::<Page>(), Ok(Page::Landing));
        assert_eq!("/success-banner".parse::<Page>(), Ok(Page::SuccessBanner));
        assert_eq!(
            "blog".parse::<Page>(),
            Err(UnknownPage("blog".to_string()))
        );
    }

    #[test]
    fn display_matches_segment() {
        assert_eq!(Page::SuccessBanner.to_string(), "success-banner");
    }
}
