use crate::content::STATS;
use leptos::prelude::*;

/// Headline numbers band.
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats-grid">
                {STATS.iter().map(|stat| view! {
                    <div class="stat-card">
                        <div class="stat-number">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
