// Shopify placeholder page - static bullet lists only, no dashboard yet
use super::ComingSoonPanel;
use crate::content::{
    SHOPIFY_COMING, SHOPIFY_DETAILS, SHOPIFY_DETAILS_LEAD, SHOPIFY_DOCS_HREF, SHOPIFY_DOCS_TEXT,
    SHOPIFY_HEADING, SHOPIFY_INTRO,
};
use leptos::prelude::*;

#[component]
pub fn ShopifyView() -> impl IntoView {
    view! {
        <div class="page">
            <h1>{SHOPIFY_HEADING}</h1>
            <p>{SHOPIFY_INTRO}</p>
            <ComingSoonPanel features=SHOPIFY_COMING />
            <p>{SHOPIFY_DETAILS_LEAD}</p>
            <ul>
                {SHOPIFY_DETAILS.iter().map(|(label, text)| view! {
                    <li><strong>{*label}</strong>" "{*text}</li>
                }).collect::<Vec<_>>()}
            </ul>
            <p>
                "Se "<a href=SHOPIFY_DOCS_HREF>"dokumentasjonen"</a>{SHOPIFY_DOCS_TEXT}
            </p>
        </div>
    }
}
