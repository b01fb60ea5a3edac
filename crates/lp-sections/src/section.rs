//! Section descriptors.

use lp_assets::ImageAsset;

use crate::SectionKind;

/// A `{label, target_url}` pair for navigation, footer and social links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkDescriptor {
    /// Visible text.
    pub label: &'static str,
    /// Link target.
    pub target_url: &'static str,
}

impl LinkDescriptor {
    /// Create a link descriptor.
    #[must_use]
    pub const fn new(label: &'static str, target_url: &'static str) -> Self {
        Self { label, target_url }
    }
}

/// Colour accent of an icon badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Red,
    Gray,
}

impl Accent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

/// Visual style of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Login,
    Cta,
    Purple,
    White,
    Green,
}

impl ButtonStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Login => "login",
            Self::Cta => "cta",
            Self::Purple => "purple",
            Self::White => "white",
            Self::Green => "green",
        }
    }
}

/// A button with static label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub style: ButtonStyle,
}

impl Button {
    #[must_use]
    pub const fn new(label: &'static str, style: ButtonStyle) -> Self {
        Self { label, style }
    }
}

/// Card with an emoji icon badge, title and body text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconCard {
    pub icon: &'static str,
    pub accent: Accent,
    pub title: &'static str,
    pub text: &'static str,
}

/// Small icon with a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconLabel {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Card with title, body text and a single action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionCard {
    pub title: &'static str,
    pub text: &'static str,
    pub action: &'static str,
}

/// Which side of a split block holds the image on wide layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSide {
    Left,
    Right,
}

/// Text column next to an illustration.
#[derive(Debug)]
pub struct SplitBlock {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Check-marked bullet points (may be empty).
    pub bullets: Vec<&'static str>,
    pub action: Option<Button>,
    pub image: ImageAsset,
    pub image_side: MediaSide,
}

/// Navigation bar.
#[derive(Debug)]
pub struct NavBar {
    pub brand: &'static str,
    pub links: Vec<LinkDescriptor>,
    pub login: Button,
    pub cta: Button,
}

/// Hero section.
#[derive(Debug)]
pub struct Hero {
    /// Headline, one entry per rendered line.
    pub title_lines: Vec<&'static str>,
    pub subtitle: &'static str,
    pub actions: Vec<Button>,
    pub image: ImageAsset,
}

/// Heading plus a grid of icon cards.
#[derive(Debug)]
pub struct CardGrid {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<IconCard>,
}

/// Business benefits split with a row of department icons below it.
#[derive(Debug)]
pub struct BusinessBenefits {
    pub split: SplitBlock,
    pub departments: Vec<IconLabel>,
}

/// Heading plus a grid of action cards.
#[derive(Debug)]
pub struct ActionGrid {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<ActionCard>,
}

/// Security feature cards next to a pitch.
#[derive(Debug)]
pub struct TrustBlock {
    pub features: Vec<IconCard>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub action: Button,
}

/// Strip of customer logos.
///
/// The strip is rendered even when every logo is hidden.
#[derive(Debug)]
pub struct LogoStrip {
    pub title: &'static str,
    pub logos: Vec<ImageAsset>,
}

/// Titled column of footer links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkColumn {
    pub title: &'static str,
    pub links: Vec<LinkDescriptor>,
}

/// Page footer.
#[derive(Debug)]
pub struct Footer {
    pub title: &'static str,
    pub email_placeholder: &'static str,
    pub submit: Button,
    pub columns: Vec<LinkColumn>,
    pub social_title: &'static str,
    pub social_links: Vec<LinkDescriptor>,
    pub languages: Vec<&'static str>,
    pub copyright: &'static str,
}

/// One self-contained block of the page.
#[derive(Debug)]
pub enum Section {
    Nav(NavBar),
    Hero(Hero),
    FeatureGrid(CardGrid),
    BusinessBenefits(BusinessBenefits),
    AiCapabilities(ActionGrid),
    AudienceSegments(SplitBlock),
    AiPotential(SplitBlock),
    TrustCompliance(TrustBlock),
    CustomerLogos(LogoStrip),
    Footer(Footer),
}

impl Section {
    /// Kind of this section.
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Nav(_) => SectionKind::Nav,
            Self::Hero(_) => SectionKind::Hero,
            Self::FeatureGrid(_) => SectionKind::FeatureGrid,
            Self::BusinessBenefits(_) => SectionKind::BusinessBenefits,
            Self::AiCapabilities(_) => SectionKind::AiCapabilities,
            Self::AudienceSegments(_) => SectionKind::AudienceSegments,
            Self::AiPotential(_) => SectionKind::AiPotential,
            Self::TrustCompliance(_) => SectionKind::TrustCompliance,
            Self::CustomerLogos(_) => SectionKind::CustomerLogos,
            Self::Footer(_) => SectionKind::Footer,
        }
    }

    /// Image assets owned by this section, in document order.
    #[must_use]
    pub fn images(&self) -> &[ImageAsset] {
        match self {
            Self::Hero(hero) => std::slice::from_ref(&hero.image),
            Self::BusinessBenefits(benefits) => std::slice::from_ref(&benefits.split.image),
            Self::AudienceSegments(split) | Self::AiPotential(split) => {
                std::slice::from_ref(&split.image)
            }
            Self::CustomerLogos(strip) => &strip.logos,
            Self::Nav(_)
            | Self::FeatureGrid(_)
            | Self::AiCapabilities(_)
            | Self::TrustCompliance(_)
            | Self::Footer(_) => &[],
        }
    }
}
