//! Section kinds and their fixed document order.

/// The kind of a page section.
///
/// Variants are declared in document order; [`SectionKind::ORDER`] lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SectionKind {
    /// Top navigation bar.
    Nav,
    /// Headline, call-to-action buttons and hero image.
    Hero,
    /// Three highlighted feature cards.
    FeatureGrid,
    /// Benefits list with illustration and department icons.
    BusinessBenefits,
    /// AI capability cards.
    AiCapabilities,
    /// Per-team automation pitch.
    AudienceSegments,
    /// AI potential pitch with the image on the left.
    AiPotential,
    /// Security and compliance features.
    TrustCompliance,
    /// Customer logo strip.
    CustomerLogos,
    /// Contact form, link columns, social links, language selector, copyright.
    Footer,
}

impl SectionKind {
    /// Every kind, in document order.
    pub const ORDER: [Self; 10] = [
        Self::Nav,
        Self::Hero,
        Self::FeatureGrid,
        Self::BusinessBenefits,
        Self::AiCapabilities,
        Self::AudienceSegments,
        Self::AiPotential,
        Self::TrustCompliance,
        Self::CustomerLogos,
        Self::Footer,
    ];

    /// Short identifier used in `data-section` attributes and JSON.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::Hero => "hero",
            Self::FeatureGrid => "feature-grid",
            Self::BusinessBenefits => "business-benefits",
            Self::AiCapabilities => "ai-capabilities",
            Self::AudienceSegments => "audience-segments",
            Self::AiPotential => "ai-potential",
            Self::TrustCompliance => "trust-compliance",
            Self::CustomerLogos => "customer-logos",
            Self::Footer => "footer",
        }
    }

    /// Index of this kind in [`SectionKind::ORDER`].
    #[must_use]
    pub fn position(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_positions() {
        for (index, kind) in SectionKind::ORDER.iter().enumerate() {
            assert_eq!(kind.position(), index, "{kind}");
        }
    }

    #[test]
    fn test_order_is_sorted() {
        assert!(SectionKind::ORDER.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = SectionKind::ORDER.iter().map(|k| k.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SectionKind::ORDER.len());
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(SectionKind::ORDER[0], SectionKind::Nav);
        assert_eq!(SectionKind::ORDER[9], SectionKind::Footer);
    }
}
