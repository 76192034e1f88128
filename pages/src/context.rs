//! Per-page-view state, resolved once when a page mounts.

use tracing::debug;

use crate::query::QueryParams;
use crate::variant::{self, PageVariant};
use crate::version::{self, VERSION_PARAM};

/// Everything a page reads from its URL at mount time.
///
/// Later URL changes are not observed; a new value needs a remount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub variant: PageVariant,
    pub legacy: bool,
    /// Installed Etcher version, shown in the banner footer.
    pub etcher_version: Option<String>,
}

impl PageContext {
    pub fn resolve(params: &QueryParams) -> Self {
        let context = Self {
            variant: variant::resolve(params),
            legacy: version::resolve(params),
            etcher_version: params.get(VERSION_PARAM).map(str::to_owned),
        };
        debug!(
            variant = ?context.variant.raw(),
            legacy = context.legacy,
            "resolved page context"
        );
        context
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::resolve(&QueryParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_defaults() {
        let context = PageContext::default();
        assert_eq!(context.variant.raw(), None);
        assert!(context.legacy);
        assert_eq!(context.etcher_version, None);
    }

    #[test]
    fn reads_all_parameters() {
        let context = PageContext::resolve(&QueryParams::parse("vn=b&etcher-version=1.5.0"));
        assert_eq!(context.variant.raw(), Some("b"));
        assert!(!context.legacy);
        assert_eq!(context.etcher_version.as_deref(), Some("1.5.0"));
    }
}
