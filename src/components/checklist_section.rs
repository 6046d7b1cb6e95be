//! Checklist Section Component
//!
//! Checklist of one item: toggle rows, remove with confirm, inline add
//! form with a type selector. Honors the show-completed setting.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::manager::use_hub_store;
use crate::models::CheckboxType;

/// Checklist for a single catalog item
#[component]
pub fn ChecklistSection(item_id: &'static str) -> impl IntoView {
    let hub = use_hub_store();

    let (new_label, set_new_label) = signal(String::new());
    let (new_type, set_new_type) = signal(CheckboxType::Test);

    let visible = move || {
        let show_completed = hub.settings().show_completed_checkboxes;
        hub.item_checkboxes(item_id)
            .into_iter()
            .filter(|cb| show_completed || !cb.checked)
            .collect::<Vec<_>>()
    };

    let hidden_count = move || {
        if hub.settings().show_completed_checkboxes {
            0
        } else {
            hub.item_checkboxes(item_id)
                .iter()
                .filter(|cb| cb.checked)
                .count()
        }
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let label = new_label.get().trim().to_string();
        if label.is_empty() {
            return;
        }
        hub.add_checkbox(item_id, &label, false, new_type.get());
        set_new_label.set(String::new());
    };

    view! {
        <div class="checklist-section">
            // key includes checked so a toggled row re-renders
            <For
                each=visible
                key=|cb| format!("{}-{}", cb.id, cb.checked)
                children=move |cb| {
                    let toggle_id = cb.id.clone();
                    let remove_id = cb.id.clone();
                    let row_class = if cb.checked {
                        "checkbox-row checked"
                    } else {
                        "checkbox-row"
                    };
                    view! {
                        <div class=row_class>
                            <input
                                type="checkbox"
                                checked=cb.checked
                                on:change=move |_| {
                                    hub.toggle_checkbox(item_id, &toggle_id);
                                }
                            />
                            <span class="checkbox-label">{cb.label.clone()}</span>
                            <span class=format!("checkbox-type {}", cb.checkbox_type.css_class())>
                                {cb.checkbox_type.label()}
                            </span>
                            <DeleteConfirmButton
                                button_class="checkbox-remove-btn"
                                on_confirm=Callback::new(move |_| {
                                    hub.remove_checkbox(item_id, &remove_id);
                                })
                            />
                        </div>
                    }
                }
            />

            {move || {
                let hidden = hidden_count();
                (hidden > 0).then(|| view! {
                    <p class="checklist-hidden-hint">{hidden} " completed hidden"</p>
                })
            }}

            <form class="checkbox-add-form" on:submit=on_add>
                <div class="add-row">
                    <input
                        type="text"
                        placeholder="Add checklist entry..."
                        prop:value=move || new_label.get()
                        on:input=move |ev| set_new_label.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add"</button>
                </div>
                <div class="type-selector-row">
                    {CheckboxType::ALL.iter().map(|&checkbox_type| {
                        let is_selected = move || new_type.get() == checkbox_type;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() {
                                    format!("type-btn small active {}", checkbox_type.css_class())
                                } else {
                                    "type-btn small".to_string()
                                }
                                on:click=move |_| set_new_type.set(checkbox_type)
                            >
                                {checkbox_type.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </form>
        </div>
    }
}
