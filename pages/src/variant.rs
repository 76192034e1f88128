//! A/B variant selection.
//!
//! The `vn` query parameter is read once when a page mounts and kept as-is;
//! the layouts below turn it into one of two static view trees. No value is
//! ever rejected: anything unrecognised takes the default branch.

use crate::query::QueryParams;

/// Query parameter carrying the experiment variant.
pub const VARIANT_PARAM: &str = "vn";

/// Raw `vn` value for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageVariant(Option<String>);

impl PageVariant {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Some(raw.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// The value exactly as it appeared in the URL.
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    fn is_b(&self) -> bool {
        self.raw() == Some("b")
    }
}

/// Look up `vn` without validating it.
pub fn resolve(params: &QueryParams) -> PageVariant {
    PageVariant(params.get(VARIANT_PARAM).map(str::to_owned))
}

/// Content blocks of the landing page, below the shared header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingSection {
    Description,
    Features,
    Rationale,
}

/// Landing page arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingLayout {
    /// Default: product description, then the feature grid.
    DescriptionFirst,
    /// Variant `b`: feature grid, then the rationale block.
    FeaturesFirst,
}

impl LandingLayout {
    pub fn for_variant(variant: &PageVariant) -> Self {
        if variant.is_b() {
            Self::FeaturesFirst
        } else {
            Self::DescriptionFirst
        }
    }

    pub fn sections(self) -> [LandingSection; 2] {
        match self {
            Self::DescriptionFirst => [LandingSection::Description, LandingSection::Features],
            Self::FeaturesFirst => [LandingSection::Features, LandingSection::Rationale],
        }
    }
}

/// Success banner flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    A,
    B,
}

impl BannerKind {
    /// Variant the banner page starts with when nobody overrides it.
    pub const DEFAULT_VARIANT: &'static str = "b";

    pub fn for_variant(variant: &PageVariant) -> Self {
        if variant.is_b() { Self::B } else { Self::A }
    }

    /// `vn` metadata value attached to the banner's tracked button.
    pub fn tag(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_passes_values_through() {
        assert_eq!(resolve(&QueryParams::parse("vn=b")).raw(), Some("b"));
        assert_eq!(resolve(&QueryParams::parse("vn=x")).raw(), Some("x"));
        assert_eq!(resolve(&QueryParams::parse("")).raw(), None);
    }

    #[test]
    fn resolve_does_not_normalise_case() {
        assert_eq!(resolve(&QueryParams::parse("vn=B")).raw(), Some("B"));
        assert_eq!(
            LandingLayout::for_variant(&PageVariant::new("B")),
            LandingLayout::DescriptionFirst
        );
    }

    #[test]
    fn landing_layout_per_variant() {
        assert_eq!(
            LandingLayout::for_variant(&PageVariant::new("b")).sections(),
            [LandingSection::Features, LandingSection::Rationale]
        );
        for other in [PageVariant::new("a"), PageVariant::new("x"), PageVariant::new(""), PageVariant::absent()] {
            assert_eq!(
                LandingLayout::for_variant(&other).sections(),
                [LandingSection::Description, LandingSection::Features]
            );
        }
    }

    #[test]
    fn banner_kind_per_variant() {
        assert_eq!(BannerKind::for_variant(&PageVariant::new(BannerKind::DEFAULT_VARIANT)), BannerKind::B);
        assert_eq!(BannerKind::for_variant(&PageVariant::new("a")), BannerKind::A);
        assert_eq!(BannerKind::for_variant(&PageVariant::new("zzz")), BannerKind::A);
        assert_eq!(BannerKind::for_variant(&PageVariant::absent()), BannerKind::A);
    }
}
