//! Stats Bar Component
//!
//! Aggregate counts over the persisted document. Reads track the store,
//! so the counters update after every mutation.

use leptos::prelude::*;

use crate::manager::use_hub_store;

/// Summary counters under the title bar
#[component]
pub fn StatsBar() -> impl IntoView {
    let hub = use_hub_store();

    view! {
        <div class="stats-bar">
            <span class="stat">
                <span class="stat-value">{move || hub.stats().items}</span>
                " items tracked"
            </span>
            <span class="stat">
                <span class="stat-value">
                    {move || {
                        let stats = hub.stats();
                        format!("{}/{}", stats.completed_checkboxes, stats.total_checkboxes)
                    }}
                </span>
                " checks done"
            </span>
            <span class="stat">
                <span class="stat-value">{move || hub.stats().total_notes}</span>
                " item notes"
            </span>
            <span class="stat">
                <span class="stat-value">{move || hub.stats().global_notes}</span>
                " global notes"
            </span>
        </div>
    }
}
