//! Status Selector Component
//!
//! Button row over every item status, used inside the expanded card.

use leptos::prelude::*;

use crate::models::ItemStatus;

/// Status selector buttons
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<ItemStatus>,
    on_change: impl Fn(ItemStatus) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {ItemStatus::ALL.iter().map(|&status| {
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("status-btn active {}", status.css_class())
                        } else {
                            "status-btn".to_string()
                        }
                        on:click=move |_| on_change(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
