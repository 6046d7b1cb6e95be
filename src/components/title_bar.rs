//! Title Bar Component
//!
//! Hub header with the project name and a storage-mode hint.

use leptos::prelude::*;

/// Hub page header
#[component]
pub fn TitleBar(storage_available: bool) -> impl IntoView {
    view! {
        <header class="title-bar">
            <div class="title-bar-main">
                <span class="title-bar-icon">"♪"</span>
                <h1 class="title-bar-title">"Sequencer Hub"</h1>
            </div>
            <span class="title-bar-subtitle">"feature dashboard"</span>
            <Show when=move || !storage_available>
                <span class="title-bar-warning" title="Changes are kept in memory only">
                    "no local storage"
                </span>
            </Show>
        </header>
    }
}
