//! Section descriptor types for the landing page.
//!
//! A page is an ordered list of [`Section`]s. Each section is pure data:
//! static copy, [`LinkDescriptor`]s for repeated link blocks, card
//! descriptors for repeated card blocks, and the [`ImageAsset`]s it owns.
//! Rendering lives in `lp-renderer`; this crate only describes structure.
//!
//! [`ImageAsset`]: lp_assets::ImageAsset

mod kind;
mod section;

pub use kind::SectionKind;
pub use section::{
    Accent, ActionCard, ActionGrid, BusinessBenefits, Button, ButtonStyle, CardGrid, Footer, Hero,
    IconCard, IconLabel, LinkColumn, LinkDescriptor, LogoStrip, MediaSide, NavBar, Section,
    SplitBlock, TrustBlock,
};
