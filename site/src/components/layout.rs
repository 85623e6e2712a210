//! Layout wrapper - the complete HTML document around one page body.
//!
//! Page views never build chrome themselves; [`crate::render_page`] hands
//! this component the page's [`PageMeta`] and content tree.

use crate::styles::SITE_CSS;
use crate::types::PageMeta;
use leptos::prelude::*;

/// The chromed document: head metadata, inline stylesheet, navigation, and
/// the page body in the main slot.
#[component]
pub fn PageDocument(meta: PageMeta, body: AnyView) -> impl IntoView {
    view! {
        <html lang="no">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <SiteNav />
                <main class="site-main">{body}</main>
            </body>
        </html>
    }
}

#[component]
fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <div class="container nav-inner">
                <a href="/" class="nav-brand">"PROTONORD"</a>
                <div class="nav-links">
                    <a href="/" class="nav-link">"Hjem"</a>
                    <a href="/shopify" class="nav-link">"Shopify"</a>
                    <a href="/cloud-files" class="nav-link">"Cloud Files"</a>
                    <a href="/docs" class="nav-link">"Dokumentasjon"</a>
                </div>
            </div>
        </nav>
    }
}
