//! Notes Section Component
//!
//! Notes of one item: list with inline edit, remove with confirm, and
//! an add form with a type selector.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::manager::use_hub_store;
use crate::models::NoteType;

/// Notes editor for a single catalog item
#[component]
pub fn NotesSection(item_id: &'static str) -> impl IntoView {
    let hub = use_hub_store();

    let (new_content, set_new_content) = signal(String::new());
    let (new_type, set_new_type) = signal(NoteType::Info);
    // id of the note currently in edit mode, plus its draft text
    let (editing, set_editing) = signal::<Option<String>>(None);
    let (draft, set_draft) = signal(String::new());

    let notes = move || hub.item_notes(item_id);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_content.get().trim().to_string();
        if content.is_empty() {
            return;
        }
        hub.add_note(item_id, &content, new_type.get(), None);
        set_new_content.set(String::new());
    };

    let save_edit = move |note_id: &str| {
        let content = draft.get().trim().to_string();
        if !content.is_empty() {
            hub.update_note(item_id, note_id, &content);
        }
        set_editing.set(None);
    };

    view! {
        <div class="notes-section">
            // key includes updated_at so an edited row re-renders
            <For
                each=notes
                key=|note| format!("{}-{}", note.id, note.updated_at)
                children=move |note| {
                    let note_id = note.id.clone();
                    let remove_id = note.id.clone();
                    let content = note.content.clone();

                    view! {
                        <div class=format!("note-row {}", note.note_type.css_class())>
                            <span class="note-type-tag">{note.note_type.label()}</span>

                            {move || {
                                let is_editing =
                                    editing.get().as_deref() == Some(note_id.as_str());
                                if is_editing {
                                    let save_id = note_id.clone();
                                    let keydown_id = note_id.clone();
                                    view! {
                                        <input
                                            type="text"
                                            class="note-edit-input"
                                            prop:value=move || draft.get()
                                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                                            on:blur=move |_| save_edit(&save_id)
                                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                if ev.key() == "Enter" {
                                                    ev.prevent_default();
                                                    save_edit(&keydown_id);
                                                } else if ev.key() == "Escape" {
                                                    set_editing.set(None);
                                                }
                                            }
                                        />
                                    }.into_any()
                                } else {
                                    let edit_id = note_id.clone();
                                    let shown = content.clone();
                                    let draft_seed = content.clone();
                                    view! {
                                        <span
                                            class="note-content"
                                            title="click to edit"
                                            on:click=move |_| {
                                                set_draft.set(draft_seed.clone());
                                                set_editing.set(Some(edit_id.clone()));
                                            }
                                        >
                                            {shown}
                                        </span>
                                    }.into_any()
                                }
                            }}

                            {note.author.clone().map(|author| view! {
                                <span class="note-author">{author}</span>
                            })}

                            <DeleteConfirmButton
                                button_class="note-remove-btn"
                                on_confirm=Callback::new(move |_| {
                                    hub.remove_note(item_id, &remove_id);
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
                        placeholder="Add note..."
                        prop:value=move || new_content.get()
                        on:input=move |ev| set_new_content.set(event_target_value(&ev))
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
        </div>
    }
}
