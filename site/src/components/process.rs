use crate::content::{PROCESS_HEADING, PROCESS_STEPS};
use leptos::prelude::*;

/// Numbered deployment pipeline steps, in listed order.
#[component]
pub fn DeploymentProcess() -> impl IntoView {
    view! {
        <section class="process">
            <h2>{PROCESS_HEADING}</h2>
            <div class="process-grid">
                {PROCESS_STEPS.iter().enumerate().map(|(idx, step)| view! {
                    <div class="process-step">
                        <div class="step-number">{idx + 1}</div>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
