//! Global Notes Panel Component
//!
//! Notes that belong to the hub itself rather than to any one item.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::manager::use_hub_store;
use crate::models::NoteType;

/// Envelope-level notes panel
#[component]
pub fn GlobalNotesPanel() -> impl IntoView {
    let hub = use_hub_store();

    let (new_content, set_new_content) = signal(String::new());
    let (new_author, set_new_author) = signal(String::new());
    let (new_type, set_new_type) = signal(NoteType::Info);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_content.get().trim().to_string();
        if content.is_empty() {
            return;
        }
        let author = new_author.get().trim().to_string();
        let author = (!author.is_empty()).then_some(author);
        hub.add_global_note(&content, new_type.get(), author);
        set_new_content.set(String::new());
    };

    view! {
        <aside class="global-notes-panel">
            <h2 class="panel-title">"Project Notes"</h2>

            <For
                each=move || hub.global_notes()
                key=|note| note.id.clone()
                children=move |note| {
                    let remove_id = note.id.clone();
                    view! {
                        <div class=format!("note-row {}", note.note_type.css_class())>
                            <span class="note-type-tag">{note.note_type.label()}</span>
                            <span class="note-content">{note.content.clone()}</span>
                            {note.author.clone().map(|author| view! {
                                <span class="note-author">{author}</span>
                            })}
                            <DeleteConfirmButton
                                button_class="note-remove-btn"
                                on_confirm=Callback::new(move |_| {
                                    hub.remove_global_note(&remove_id);
                                })
                            />
                        </div>
                    }
                }
            />

            <form class="note-add-form" on:submit=on_add>
                <div class="add-row">
                    <input
                        type="text"
                        placeholder="Add project note..."
                        prop:value=move || new_content.get()
                        on:input=move |ev| set_new_content.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="author-input"
                        placeholder="author (optional)"
                        prop:value=move || new_author.get()
                        on:input=move |ev| set_new_author.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                </div>
                <div class="type-selector-row">
                    {NoteType::ALL.iter().map(|&note_type| {
                        let is_selected = move || new_type.get() == note_type;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() {
                                    format!("type-btn small active {}", note_type.css_class())
                                } else {
                                    "type-btn small".to_string()
                                }
                                on:click=move |_| set_new_type.set(note_type)
                            >
                                {note_type.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </form>
        </aside>
    }
}
