use contracts::enums::SummaryStyle;
use contracts::summarize::{SummarizeRequest, SummarizeResponse};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::api;
use super::state::{ApiStatus, RequestEpoch, ResultPanel};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::download::{download_file_name, download_text_file};
use crate::shared::format::summary_meta_line;
use crate::shared::text_stats::{check_upload, validate_for_summary, TextStats};

#[component]
pub fn SummarizerPage() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (file_label, set_file_label) = signal(String::new());
    let (current_style, set_current_style) = signal(SummaryStyle::default());
    let (summary, set_summary) = signal(None::<SummarizeResponse>);
    let (panel, set_panel) = signal(ResultPanel::Empty);
    let (api_status, set_api_status) = signal(ApiStatus::Connecting);
    let (current_model, set_current_model) = signal(None::<String>);
    let (epoch, set_epoch) = signal(RequestEpoch::default());
    let (copy_confirmed, set_copy_confirmed) = signal(false);
    let (download_confirmed, set_download_confirmed) = signal(false);

    let stats = Memo::new(move |_| TextStats::of(&text.get()));

    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let reset_file_input = move || {
        if let Some(input) = file_input_ref.get_untracked() {
            input.set_value("");
        }
    };

    // Probe backend health on mount; the model list only matters once the
    // backend is known to be reachable
    Effect::new(move || {
        spawn_local(async move {
            match api::check_health().await {
                Ok(health) => {
                    set_api_status.set(ApiStatus::Connected(health.provider));
                    match api::list_models().await {
                        Ok(list) => {
                            let current =
                                list.models.into_iter().find(|m| m.current).map(|m| m.name);
                            set_current_model.set(current);
                        }
                        Err(err) => log::error!("Failed to load model list: {}", err),
                    }
                }
                Err(err) => {
                    log::error!("Health check failed: {}", err);
                    set_api_status.set(ApiStatus::Offline);
                    set_panel.set(ResultPanel::Error(
                        "Cannot connect to backend server. Please ensure:\n1. Backend server is running\n2. Server is reachable on port 5000"
                            .to_string(),
                    ));
                }
            }
        });
    });

    let on_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(files) = input.files() else { return };
        let Some(file) = files.get(0) else { return };

        // Both checks happen before any byte of the file is read
        if let Err(msg) = check_upload(&file.name(), file.size() as u64) {
            set_panel.set(ResultPanel::Error(msg));
            input.set_value("");
            return;
        }

        let name = file.name();
        spawn_local(async move {
            match JsFuture::from(file.text()).await {
                Ok(value) => {
                    set_text.set(value.as_string().unwrap_or_default());
                    set_file_label.set(format!("📄 {}", name));
                    set_panel.set(ResultPanel::Empty);
                }
                Err(err) => {
                    log::error!("File read failed: {:?}", err);
                    set_panel.set(ResultPanel::Error(
                        "Error reading file. Please try again.".to_string(),
                    ));
                    reset_file_input();
                }
            }
        });
    };

    let on_text_input = move |ev| {
        let value = event_target_value(&ev);
        // a stale upload label would misattribute freshly typed text
        if value.is_empty() {
            set_file_label.set(String::new());
        }
        set_text.set(value);
    };

    let on_summarize = move |_| {
        let trimmed = text.get_untracked().trim().to_string();
        if let Err(msg) = validate_for_summary(&trimmed) {
            set_panel.set(ResultPanel::Error(msg));
            return;
        }

        // Loading disables the trigger before the request is in flight
        set_panel.set(ResultPanel::Loading);
        let ticket = epoch.get_untracked().next();
        set_epoch.set(ticket);

        let request = SummarizeRequest {
            text: trimmed,
            style: current_style.get_untracked(),
        };
        spawn_local(async move {
            let result = api::summarize(&request).await;
            if !epoch.get_untracked().accepts(ticket) {
                return;
            }
            match result {
                Ok(response) => {
                    set_summary.set(Some(response));
                    set_panel.set(ResultPanel::Success);
                }
                Err(msg) => {
                    log::error!("Summarize request failed: {}", msg);
                    set_panel.set(ResultPanel::Error(msg));
                }
            }
        });
    };

    let on_clear = move |_| {
        // pending responses become stale
        set_epoch.update(|e| *e = e.next());
        set_text.set(String::new());
        reset_file_input();
        set_file_label.set(String::new());
        set_summary.set(None);
        set_panel.set(ResultPanel::Empty);
        set_current_style.set(SummaryStyle::default());
    };

    let on_copy = move |_| {
        let Some(response) = summary.get_untracked() else {
            return;
        };
        copy_to_clipboard_with_callback(&response.summary, move |ok| {
            if ok {
                set_copy_confirmed.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(2_000).await;
                    set_copy_confirmed.set(false);
                });
            } else {
                set_panel.set(ResultPanel::Error(
                    "Failed to copy to clipboard. Please try selecting and copying manually."
                        .to_string(),
                ));
            }
        });
    };

    let on_download = move |_| {
        let Some(response) = summary.get_untracked() else {
            return;
        };
        let filename = download_file_name(
            current_style.get_untracked(),
            js_sys::Date::now() as u64,
        );
        match download_text_file(&response.summary, &filename) {
            Ok(()) => {
                set_download_confirmed.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(2_000).await;
                    set_download_confirmed.set(false);
                });
            }
            Err(err) => {
                log::error!("Download failed: {}", err);
                set_panel.set(ResultPanel::Error("Failed to download summary.".to_string()));
            }
        }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"AI Text Summarizer"</h1>
                <div class="api-status">
                    <span class=move || api_status.get().css_class()>
                        {move || api_status.get().label()}
                    </span>
                    {move || {
                        current_model
                            .get()
                            .map(|model| view! { <span class="model-chip">{model}</span> })
                    }}
                </div>
            </header>

            <section class="input-section">
                <div class="upload-area">
                    <label class="upload-label" for="file-input">
                        "📁 Upload a file (.txt, .md, .json, .pdf — max 5MB)"
                    </label>
                    <input
                        id="file-input"
                        type="file"
                        accept=".txt,.md,.json,.pdf"
                        node_ref=file_input_ref
                        on:change=on_file_change
                    />
                    <span class="file-name">{move || file_label.get()}</span>
                </div>

                <textarea
                    class="text-input"
                    placeholder="Paste or type the text you want to summarize..."
                    prop:value=move || text.get()
                    on:input=on_text_input
                ></textarea>

                <div class="text-stats">
                    <span>{move || stats.get().chars} " characters"</span>
                    <span>{move || stats.get().words} " words"</span>
                </div>

                <div class="style-selector">
                    <span class="style-selector-label">"Summary style:"</span>
                    {SummaryStyle::all()
                        .into_iter()
                        .map(|style| {
                            view! {
                                <button
                                    class="style-btn"
                                    class:active=move || current_style.get() == style
                                    on:click=move |_| set_current_style.set(style)
                                >
                                    {style.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="actions">
                    <button
                        class="summarize-btn"
                        prop:disabled=move || {
                            !stats.get().can_summarize() || panel.get().is_loading()
                        }
                        on:click=on_summarize
                    >
                        "✨ Summarize"
                    </button>
                    <button class="clear-btn" on:click=on_clear>
                        "Clear"
                    </button>
                </div>
            </section>

            <section class="result-section">
                {move || match panel.get() {
                    ResultPanel::Empty => {
                        view! {
                            <div class="empty-state">
                                <p>"Your summary will appear here."</p>
                            </div>
                        }
                            .into_any()
                    }
                    ResultPanel::Loading => {
                        view! {
                            <div class="loading-state">
                                <div class="spinner"></div>
                                <p>"Generating summary..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    ResultPanel::Error(message) => {
                        view! {
                            <div class="error-state">
                                <p class="error-text">{message}</p>
                            </div>
                        }
                            .into_any()
                    }
                    ResultPanel::Success => {
                        match summary.get() {
                            Some(response) => {
                                let meta = summary_meta_line(&response);
                                view! {
                                    <div class="success-state">
                                        <div class="summary-output">{response.summary.clone()}</div>
                                        <div class="summary-meta">{meta}</div>
                                        <div class="summary-actions">
                                            <button
                                                class="copy-btn"
                                                class:confirmed=move || copy_confirmed.get()
                                                on:click=on_copy
                                            >
                                                {move || {
                                                    if copy_confirmed.get() { "✓ Copied!" } else { "📋 Copy" }
                                                }}
                                            </button>
                                            <button
                                                class="download-btn"
                                                class:confirmed=move || download_confirmed.get()
                                                on:click=on_download
                                            >
                                                {move || {
                                                    if download_confirmed.get() {
                                                        "✓ Downloaded!"
                                                    } else {
                                                        "⬇ Download"
                                                    }
                                                }}
                                            </button>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="empty-state">
                                        <p>"Your summary will appear here."</p>
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    }
                }}
            </section>
        </div>
    }
}
