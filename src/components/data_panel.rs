//! Data Panel Component
//!
//! Backup and maintenance surface: export/import the whole document,
//! clear everything, and flip the persistence settings.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::manager::use_hub_store;

/// Export / import / settings panel
#[component]
pub fn DataPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let hub = use_hub_store();

    let (show_export, set_show_export) = signal(false);
    let (import_text, set_import_text) = signal(String::new());
    let (import_result, set_import_result) = signal::<Option<&'static str>>(None);
    let (confirm_clear, set_confirm_clear) = signal(false);

    let on_import = move |_| {
        let raw = import_text.get();
        if raw.trim().is_empty() {
            return;
        }
        if hub.import_data(&raw) {
            ctx.collapse();
            set_import_result.set(Some("Imported."));
            set_import_text.set(String::new());
        } else {
            set_import_result.set(Some("Import rejected: invalid payload."));
        }
    };

    view! {
        <aside class="data-panel">
            <h2 class="panel-title">"Data"</h2>

            <div class="editor-section">
                <label class="editor-label">"Settings"</label>
                <label class="setting-row">
                    <input
                        type="checkbox"
                        prop:checked=move || hub.settings().auto_save
                        on:change=move |ev| hub.set_auto_save(event_target_checked(&ev))
                    />
                    "Auto-save on every change"
                </label>
                <label class="setting-row">
                    <input
                        type="checkbox"
                        prop:checked=move || hub.settings().show_completed_checkboxes
                        on:change=move |ev| hub.set_show_completed(event_target_checked(&ev))
                    />
                    "Show completed checklist entries"
                </label>
                <button class="panel-btn" on:click=move |_| hub.force_save()>
                    "Save now"
                </button>
                <button class="panel-btn" on:click=move |_| hub.reload_from_storage()>
                    "Reload from storage"
                </button>
            </div>

            <div class="editor-section">
                <label class="editor-label">"Export"</label>
                <button
                    class="panel-btn"
                    on:click=move |_| set_show_export.update(|v| *v = !*v)
                >
                    {move || if show_export.get() { "Hide export" } else { "Show export" }}
                </button>
                <Show when=move || show_export.get()>
                    <textarea
                        class="export-area"
                        readonly=true
                        prop:value=move || hub.export_data()
                    ></textarea>
                </Show>
            </div>

            <div class="editor-section">
                <label class="editor-label">"Import"</label>
                <textarea
                    class="import-area"
                    placeholder="Paste an exported document..."
                    prop:value=move || import_text.get()
                    on:input=move |ev| {
                        set_import_result.set(None);
                        set_import_text.set(event_target_value(&ev));
                    }
                ></textarea>
                <button class="panel-btn" on:click=on_import>"Apply import"</button>
                {move || import_result.get().map(|msg| view! {
                    <p class="import-result">{msg}</p>
                })}
            </div>

            <div class="editor-section">
                <label class="editor-label">"Danger"</label>
                <Show when=move || !confirm_clear.get()>
                    <button
                        class="panel-btn danger"
                        on:click=move |_| set_confirm_clear.set(true)
                    >
                        "Clear all data"
                    </button>
                </Show>
                <Show when=move || confirm_clear.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Everything?"</span>
                        <button
                            class="confirm-btn"
                            on:click=move |_| {
                                hub.clear_all_data();
                                ctx.collapse();
                                set_confirm_clear.set(false);
                            }
                        >
                            "✓"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |_| set_confirm_clear.set(false)
                        >
                            "✗"
                        </button>
                    </span>
                </Show>
            </div>
        </aside>
    }
}
