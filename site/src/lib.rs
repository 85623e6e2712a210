//! # protonord-site
//!
//! Leptos SSR components and content for the ProtoNord marketing site.
//!
//! The site is a handful of static pages: a home page (hero, stats,
//! services, deployment process, footer info) and two "coming soon" pages.
//! All content is literal and fixed at compile time; rendering a page is a
//! pure transformation from those literals to an HTML string.
//!
//! ## Quick Start
//!
//! ```rust
//! use protonord_site::{pages, render_page};
//!
//! let home = pages::find("/").unwrap();
//! let html = render_page(home);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content model records
//! - [`content`] - the literal content tables (single source of truth)
//! - [`components`] - Leptos UI components, including the layout wrapper
//! - [`pages`] - the route registry binding views to paths and metadata
//! - [`styles`] - the inlined stylesheet
//!
//! ## Leptos 0.8 SSR
//!
//! Pages are rendered with Leptos 0.8's `RenderHtml` trait - pure static
//! HTML generation, no reactive runtime and no hydration.

pub mod components;
pub mod content;
pub mod pages;
pub mod styles;
pub mod types;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pages::PageEntry;

/// Render one registered page to a complete HTML document.
///
/// Builds the entry's view, wraps it in the layout with the entry's
/// [`types::PageMeta`], and renders to a string. The layout wrapper receives
/// the metadata pair unchanged.
///
/// # Example
///
/// ```rust
/// use protonord_site::{pages, render_page};
///
/// let html = render_page(pages::find("/shopify").unwrap());
/// assert!(html.contains("Shopify Dashboard"));
/// ```
pub fn render_page(page: &PageEntry) -> String {
    let body = (page.view)();
    let doc = view! { <PageDocument meta=page.meta body=body /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PAGES;
    use pretty_assertions::assert_eq;

    fn page(path: &str) -> &'static PageEntry {
        pages::find(path).expect("page is registered")
    }

    #[test]
    fn home_renders_document_shell() {
        let html = render_page(page("/"));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("PROTONORD"));
    }

    #[test]
    fn home_passes_metadata_to_layout_unchanged() {
        let html = render_page(page("/"));

        assert!(html.contains("ProtoNord - Azure Static Web Apps Demo"));
        assert!(html.contains(
            "Docusaurus website demonstrating automatic deployment to Azure Static Web Apps with GitHub Actions"
        ));
    }

    #[test]
    fn home_renders_one_card_per_content_item() {
        let html = render_page(page("/"));

        assert_eq!(html.matches("class=\"feature-card\"").count(), 4);
        assert_eq!(html.matches("class=\"stat-card\"").count(), 4);
        assert_eq!(html.matches("class=\"service-card\"").count(), 5);
        assert_eq!(html.matches("class=\"process-step\"").count(), 5);
    }

    #[test]
    fn home_sections_render_in_fixed_order() {
        let html = render_page(page("/"));

        let hero = html.find("<section class=\"hero\">").expect("hero");
        let stats = html.find("<section class=\"stats\">").expect("stats");
        let services = html.find("<section class=\"services\">").expect("services");
        let process = html.find("<section class=\"process\">").expect("process");
        let footer = html.find("<section class=\"footer\">").expect("footer");

        assert!(hero < stats);
        assert!(stats < services);
        assert!(services < process);
        assert!(process < footer);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let html = render_page(page("/"));

        let push = html.find("Code Push").expect("first step");
        let deploy = html.find("Azure Deploy").expect("last step");
        assert!(push < deploy);
        for n in 1..=5 {
            assert!(html.contains(&format!("class=\"step-number\">{}", n)));
        }
    }

    #[test]
    fn placeholder_pages_render_single_heading() {
        for path in ["/shopify", "/cloud-files"] {
            let html = render_page(page(path));
            assert_eq!(html.matches("<h1").count(), 1, "{path}");
        }
    }

    #[test]
    fn shopify_page_lists_coming_features_and_docs_link() {
        let html = render_page(page("/shopify"));

        assert!(html.contains("Kommende funksjoner:"));
        assert!(html.contains("Produktoversikt og statistikk"));
        assert!(html.contains("Real-time data synkronisering"));
        assert!(html.contains("Dashboard vil vise:"));
        assert!(html.contains("href=\"/docs/shopify-sync\""));
    }

    #[test]
    fn cloud_files_page_lists_coming_features_and_docs_link() {
        let html = render_page(page("/cloud-files"));

        assert!(html.contains("Kommende funksjoner:"));
        assert!(html.contains("rclone integrasjon"));
        assert!(html.contains("href=\"/docs/cloud-storage\""));
    }

    #[test]
    fn rendering_is_idempotent() {
        for page in PAGES {
            assert_eq!(render_page(page), render_page(page), "{}", page.path);
        }
    }

    #[test]
    fn every_page_carries_nav_and_stylesheet() {
        for page in PAGES {
            let html = render_page(page);
            assert!(html.contains("class=\"site-nav\""), "{}", page.path);
            assert!(html.contains("<style>"), "{}", page.path);
        }
    }
}
