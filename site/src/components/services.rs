use crate::content::{SERVICES, SERVICES_HEADING};
use leptos::prelude::*;

/// "Azure Static Web Apps Features" card grid.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services">
            <h2>{SERVICES_HEADING}</h2>
            <div class="services-grid">
                {SERVICES.iter().map(|service| view! {
                    <div class="service-card">
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
