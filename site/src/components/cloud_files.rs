// Cloud Files placeholder page
use super::ComingSoonPanel;
use crate::content::{
    CLOUD_FILES_COMING, CLOUD_FILES_DOCS_HREF, CLOUD_FILES_DOCS_TEXT, CLOUD_FILES_HEADING,
    CLOUD_FILES_INTRO,
};
use leptos::prelude::*;

#[component]
pub fn CloudFilesView() -> impl IntoView {
    view! {
        <div class="page">
            <h1>{CLOUD_FILES_HEADING}</h1>
            <p>{CLOUD_FILES_INTRO}</p>
            <ComingSoonPanel features=CLOUD_FILES_COMING />
            <p>
                "Se "<a href=CLOUD_FILES_DOCS_HREF>"dokumentasjonen"</a>{CLOUD_FILES_DOCS_TEXT}
            </p>
        </div>
    }
}
