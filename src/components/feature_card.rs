//! Feature Card Component
//!
//! One expandable card per catalog item: status badge and summary when
//! collapsed; status selector, checklist and notes when expanded.

use leptos::prelude::*;

use crate::components::{ChecklistSection, NotesSection, StatusSelector};
use crate::context::AppContext;
use crate::manager::use_hub_store;
use crate::models::{ItemStatus, MenuItem};

/// An interactive card for a single catalog item
#[component]
pub fn FeatureCard(item: MenuItem) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let hub = use_hub_store();
    let id = item.id;

    let expanded = move || ctx.expanded_item.get() == Some(id);

    // Override from the store wins over the catalog's static status
    let status = Signal::derive(move || hub.effective_status(&item));

    let progress = move || {
        let checkboxes = hub.item_checkboxes(id);
        let done = checkboxes.iter().filter(|c| c.checked).count();
        (done, checkboxes.len())
    };

    let note_count = move || hub.item_notes(id).len();

    let on_status_change = move |new_status: ItemStatus| {
        hub.set_item_status(id, new_status);
    };

    view! {
        <article class=move || {
            if expanded() { "feature-card expanded" } else { "feature-card" }
        }>
            <div class="card-header" on:click=move |_| ctx.toggle_expanded(id)>
                <span class="card-expand-arrow">{move || if expanded() { "▾" } else { "▸" }}</span>
                <span class="card-title">{item.title}</span>
                <span class=move || format!("status-badge {}", status.get().css_class())>
                    {move || status.get().label()}
                </span>
                {item.estimated_time.map(|estimate| view! {
                    <span class="card-estimate" title="estimated time">{estimate}</span>
                })}
                {move || {
                    let (done, total) = progress();
                    (total > 0).then(|| view! {
                        <span class="card-progress">{format!("{}/{}", done, total)}</span>
                    })
                }}
                {move || {
                    let count = note_count();
                    (count > 0).then(|| view! {
                        <span class="card-note-count">{count}" ✎"</span>
                    })
                }}
            </div>

            <p class="card-desc">{item.description}</p>

            {(!item.dependencies.is_empty()).then(|| view! {
                <p class="card-deps">"depends on: " {item.dependencies.join(", ")}</p>
            })}

            <Show when=expanded>
                <div class="card-body">
                    <a class="card-link" href=item.href>"Open " {item.title}</a>

                    <div class="editor-section">
                        <label class="editor-label">"Status"</label>
                        <StatusSelector current=status on_change=on_status_change />
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Checklist"</label>
                        <ChecklistSection item_id=id />
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Notes"</label>
                        <NotesSection item_id=id />
                    </div>
                </div>
            </Show>
        </article>
    }
}
