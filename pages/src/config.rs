//! Site configuration: analytics IDs, outbound URLs and page copy.
//!
//! A default configuration is compiled into the crate so the browser build
//! needs no fetch. Native tools can load another file with
//! [`SiteConfig::from_path`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED: &str = include_str!("../config/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("analytics.tag_manager_id must not be empty")]
    MissingTagManagerId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub tag_manager_id: String,
}

/// One tile in the landing page feature grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Image path under `/static/`.
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub analytics: Analytics,
    /// Purchase page; campaign links append `&utm_medium=...`.
    pub campaign_url: String,
    /// Form action of the mailing-list signup.
    pub pro_mailchimp_list: String,
    #[serde(default)]
    pub pro_features: Vec<Feature>,
}

impl SiteConfig {
    /// The configuration shipped with the crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.tag_manager_id.trim().is_empty() {
            return Err(ConfigError::MissingTagManagerId);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::bundled().unwrap();
        assert!(config.analytics.tag_manager_id.starts_with("GTM-"));
        assert!(!config.pro_features.is_empty());
        assert!(config.campaign_url.contains("utm_campaign=etcher_pro"));
    }

    #[test]
    fn features_and_description_are_optional() {
        let config = SiteConfig::from_json(
            r#"{
                "title": "t",
                "analytics": { "tag_manager_id": "GTM-X" },
                "campaign_url": "https://example.com/?a=1",
                "pro_mailchimp_list": "https://example.com/subscribe"
            }"#,
        )
        .unwrap();
        assert!(config.pro_features.is_empty());
        assert_eq!(config.description, "");
    }

    #[test]
    fn rejects_blank_tag_manager_id() {
        let err = SiteConfig::from_json(
            r#"{
                "title": "t",
                "analytics": { "tag_manager_id": " " },
                "campaign_url": "u",
                "pro_mailchimp_list": "m"
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingTagManagerId));
    }

    #[test]
    fn reports_parse_and_read_errors() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        let err = SiteConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
