use crate::summarize::ui::SummarizerPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SummarizerPage />
    }
}
