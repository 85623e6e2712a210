use crate::content::{FEATURES, HERO_SUBTITLE, HERO_TITLE};
use crate::types::FeatureItem;
use leptos::prelude::*;

/// Hero banner with the platform feature cards.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                <div class="hero-features">
                    {FEATURES.iter().copied().map(|item| view! { <FeatureCard item=item /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(item: FeatureItem) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{item.icon}</div>
            <h3>{item.title}</h3>
            <p>{item.description}</p>
        </div>
    }
}
