use crate::content::{
    ABOUT_HEADING, ABOUT_TEXT, FOOTER_COPYRIGHT, FOOTER_TAGLINE, TECHNOLOGIES, TECH_HEADING,
};
use leptos::prelude::*;

/// Footer info block: project description, technology list, copyright line.
#[component]
pub fn FooterInfo() -> impl IntoView {
    view! {
        <section class="footer">
            <div class="footer-content">
                <div class="footer-info">
                    <h3>{ABOUT_HEADING}</h3>
                    <p>{ABOUT_TEXT}</p>
                </div>
                <div class="footer-links">
                    <h3>{TECH_HEADING}</h3>
                    <div class="social-links">
                        {TECHNOLOGIES.iter().map(|tech| view! { <span>{*tech}</span> }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{FOOTER_COPYRIGHT}</p>
                <p>{FOOTER_TAGLINE}</p>
            </div>
        </section>
    }
}
