use leptos::prelude::*;

/// Shaded "Kommende funksjoner" panel shared by the placeholder pages.
#[component]
pub fn ComingSoonPanel(features: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="coming-soon-panel">
            <h3>"Kommende funksjoner:"</h3>
            <ul class="coming-soon-list">
                {features.iter().map(|feature| view! { <li>{*feature}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
