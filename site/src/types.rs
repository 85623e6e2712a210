//! Content model for the site.
//!
//! Every type here is a plain record over `&'static str`: the site has no
//! runtime data source, so all content is fixed at compile time and lives in
//! [`crate::content`]. The types derive `Serialize` so the generator can
//! emit a JSON manifest of what was rendered.

use serde::Serialize;

/// A platform feature card in the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    /// Emoji glyph shown above the title
    pub icon: &'static str,
    /// Card title
    pub title: &'static str,
    /// One-sentence description
    pub description: &'static str,
}

/// A headline number in the stats band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatItem {
    /// The big value ("100%", "24/7", ...)
    pub value: &'static str,
    /// Label under the value
    pub label: &'static str,
}

/// A service card in the "Azure Static Web Apps Features" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceItem {
    /// Emoji glyph shown above the title
    pub icon: &'static str,
    /// Card title
    pub title: &'static str,
    /// Longer description
    pub description: &'static str,
}

/// A numbered step in the deployment process.
///
/// Steps are rendered in listed order; the 1-based step number comes from
/// the position in [`crate::content::PROCESS_STEPS`], not from the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    /// Step title
    pub title: &'static str,
    /// What happens in this step
    pub description: &'static str,
}

/// Title and description handed to the layout wrapper for one page.
///
/// The wrapper surfaces these unchanged as `<title>` and
/// `<meta name="description">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Browser/SEO title
    pub title: &'static str,
    /// Meta description
    pub description: &'static str,
}
