//! Page registry - each route, its metadata, and the view it renders.
//!
//! A page entry is a pure function of no external input: the view builder
//! reads only [`crate::content`] tables, so rendering the same entry twice
//! yields byte-identical output.

use crate::components::{CloudFilesView, HomeView, ShopifyView};
use crate::types::PageMeta;
use leptos::prelude::*;

/// One registered page: route path, metadata for the layout wrapper, and a
/// builder for the chrome-free content tree.
#[derive(Clone, Copy, Debug)]
pub struct PageEntry {
    /// Route the page is served at
    pub path: &'static str,
    /// Title/description handed to the layout wrapper unchanged
    pub meta: PageMeta,
    /// Builds the page body
    pub view: fn() -> AnyView,
}

fn home_view() -> AnyView {
    view! { <HomeView /> }.into_any()
}

fn shopify_view() -> AnyView {
    view! { <ShopifyView /> }.into_any()
}

fn cloud_files_view() -> AnyView {
    view! { <CloudFilesView /> }.into_any()
}

/// Every page the site serves, in navigation order.
pub const PAGES: &[PageEntry] = &[
    PageEntry {
        path: "/",
        meta: PageMeta {
            title: "ProtoNord - Azure Static Web Apps Demo",
            description: "Docusaurus website demonstrating automatic deployment to Azure Static Web Apps with GitHub Actions",
        },
        view: home_view,
    },
    PageEntry {
        path: "/shopify",
        meta: PageMeta {
            title: "Shopify Dashboard",
            description: "Shopify integration and dashboard",
        },
        view: shopify_view,
    },
    PageEntry {
        path: "/cloud-files",
        meta: PageMeta {
            title: "Cloud Files",
            description: "Cloud file management and storage",
        },
        view: cloud_files_view,
    },
];

/// Look up a registered page by its route path.
pub fn find(path: &str) -> Option<&'static PageEntry> {
    PAGES.iter().find(|page| page.path == path)
}
