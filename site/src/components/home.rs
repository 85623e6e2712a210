// Home page body - the five sections in fixed order
use super::{DeploymentProcess, FooterInfo, Hero, Services, Stats};
use leptos::prelude::*;

/// The composite home view: hero, stats, services, process, footer.
#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <Hero />
        <Stats />
        <Services />
        <DeploymentProcess />
        <FooterInfo />
    }
}
