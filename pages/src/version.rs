//! Installer version parsing and the legacy-style gate.
//!
//! Versions compare the way the `compare-versions` package does: up to four
//! dotted numeric components (missing ones are zero), an optional
//! `-prerelease` that sorts below the release, and `+build` metadata that is
//! ignored.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::query::QueryParams;

/// Query parameter carrying the installed Etcher version.
pub const VERSION_PARAM: &str = "etcher-version";

/// Newest version that still gets the legacy banner treatment.
pub const LEGACY_THRESHOLD: &str = "1.4.4";

const MAX_COMPONENTS: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,
    #[error("version `{0}` has more than four numeric components")]
    TooManyComponents(String),
    #[error("invalid numeric component `{component}` in version `{input}`")]
    InvalidComponent { input: String, component: String },
    #[error("invalid pre-release identifier in version `{0}`")]
    InvalidPrerelease(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Identifier {
    Numeric(u64),
    Alpha(String),
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Alpha(_)) => Ordering::Less,
            (Self::Alpha(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alpha(a), Self::Alpha(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed dotted version.
#[derive(Clone, Debug)]
pub struct Version {
    components: [u64; MAX_COMPONENTS],
    prerelease: Vec<Identifier>,
    raw: String,
}

impl Version {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed);
        if body.is_empty() {
            return Err(VersionError::Empty);
        }

        let body = body.split_once('+').map_or(body, |(head, _build)| head);
        let (core, prerelease) = match body.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (body, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(VersionError::TooManyComponents(input.to_owned()));
        }
        let mut components = [0; MAX_COMPONENTS];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = parse_component(part).ok_or_else(|| VersionError::InvalidComponent {
                input: input.to_owned(),
                component: (*part).to_owned(),
            })?;
        }

        let prerelease = match prerelease {
            Some(pre) => parse_prerelease(pre)
                .ok_or_else(|| VersionError::InvalidPrerelease(input.to_owned()))?,
            None => Vec::new(),
        };

        Ok(Self {
            components,
            prerelease,
            raw: trimmed.to_owned(),
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse_prerelease(pre: &str) -> Option<Vec<Identifier>> {
    pre.split('.')
        .map(|id| {
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                None
            } else if id.bytes().all(|b| b.is_ascii_digit()) {
                id.parse().ok().map(Identifier::Numeric)
            } else {
                Some(Identifier::Alpha(id.to_owned()))
            }
        })
        .collect()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components
            .cmp(&other.components)
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (true, true) => self.prerelease.cmp(&other.prerelease),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `1.4` and `1.4.0` are the same version.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Compare two version strings, `-1`, `0` or `1` like `compare-versions`.
pub fn compare(a: &str, b: &str) -> Result<i8, VersionError> {
    let ordering = Version::parse(a)?.cmp(&Version::parse(b)?);
    Ok(ordering as i8)
}

/// Whether the banner should use the legacy style for this installer version.
///
/// No version at all means an installer too old to send one. Anything up to
/// and including [`LEGACY_THRESHOLD`] is legacy; an unparseable version is
/// treated as legacy too.
pub fn is_legacy(version: Option<&str>) -> bool {
    let Some(version) = version else {
        return true;
    };
    match compare(version, LEGACY_THRESHOLD) {
        Ok(ordering) => ordering < 1,
        Err(err) => {
            warn!(%err, version, "unparseable etcher-version, using legacy banner");
            true
        }
    }
}

/// Read `etcher-version` from the page URL and gate on it.
pub fn resolve(params: &QueryParams) -> bool {
    is_legacy(params.get(VERSION_PARAM))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn absent_version_is_legacy() {
        assert!(is_legacy(None));
        assert!(resolve(&QueryParams::default()));
    }

    #[test]
    fn threshold_boundary() {
        assert!(is_legacy(Some("1.4.4")));
        assert!(!is_legacy(Some("1.4.5")));
        assert!(!is_legacy(Some("1.5.0")));
        assert!(is_legacy(Some("1.3.9")));
        assert!(!is_legacy(Some("2")));
    }

    #[test]
    fn prerelease_of_next_patch_is_not_legacy() {
        assert!(!is_legacy(Some("1.4.5-beta.1")));
        assert!(is_legacy(Some("1.4.4-beta.1")));
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(v("1.4"), v("1.4.0"));
        assert_eq!(v("1"), v("1.0.0.0"));
        assert_eq!(compare("1.4", "1.4.0"), Ok(0));
        assert_eq!(compare("1.10.0", "1.9.9"), Ok(1));
        assert_eq!(compare("1.4.4", "1.4.4.1"), Ok(-1));
    }

    #[test]
    fn prefix_and_build_metadata() {
        assert_eq!(v("v1.4.4"), v("1.4.4"));
        assert_eq!(v("1.4.4+sha.5114f85"), v("1.4.4"));
        assert_eq!(v(" 1.4.4 ").to_string(), "1.4.4");
    }

    #[test]
    fn prerelease_ordering() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
        assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
    }

    #[test]
    fn malformed_versions_are_errors() {
        assert_eq!(Version::parse(""), Err(VersionError::Empty));
        assert_eq!(Version::parse("v"), Err(VersionError::Empty));
        assert!(matches!(
            Version::parse("1.x.4"),
            Err(VersionError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Version::parse("1..4"),
            Err(VersionError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Version::parse("1.2.3.4.5"),
            Err(VersionError::TooManyComponents(_))
        ));
        assert!(matches!(
            Version::parse("1.2.3-"),
            Err(VersionError::InvalidPrerelease(_))
        ));
    }

    #[test]
    fn malformed_version_falls_back_to_legacy() {
        assert!(is_legacy(Some("banana")));
        assert!(is_legacy(Some("")));
        assert!(resolve(&QueryParams::parse("etcher-version=9.x")));
    }
}
