//! Sequencer Hub App
//!
//! Main application component: title, stats, one section per catalog
//! category, plus the notes and data side column.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{CategorySection, DataPanel, GlobalNotesPanel, StatsBar, TitleBar};
use crate::context::AppContext;
use crate::manager::HubStore;

#[component]
pub fn App() -> impl IntoView {
    // One store per page; everything below reaches it through context
    let hub = HubStore::browser();
    let storage_available = hub.is_persistent();
    provide_context(hub);

    let expanded_item = signal::<Option<&'static str>>(None);
    provide_context(AppContext::new(expanded_item));

    let categories = catalog::group_by_category(catalog::MENU_ITEMS);
    web_sys::console::log_1(
        &format!(
            "[HUB] {} categories, {} items, persistent={}",
            categories.len(),
            catalog::MENU_ITEMS.len(),
            storage_available
        )
        .into(),
    );

    view! {
        <div class="app-layout">
            <TitleBar storage_available=storage_available />
            <StatsBar />

            <div class="hub-columns">
                <main class="main-content">
                    {categories.into_iter().map(|category| view! {
                        <CategorySection category=category />
                    }).collect_view()}
                </main>

                <div class="side-column">
                    <GlobalNotesPanel />
                    <DataPanel />
                </div>
            </div>
        </div>
    }
}
