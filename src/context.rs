//! Application Context
//!
//! Transient UI signals provided via Leptos Context API. The persisted
//! state itself lives in `HubStore`, which is provided separately and
//! is reactive on its own.

use leptos::prelude::*;

/// App-wide UI signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which card is expanded (None = all collapsed) - read
    pub expanded_item: ReadSignal<Option<&'static str>>,
    /// Which card is expanded - write
    set_expanded_item: WriteSignal<Option<&'static str>>,
}

impl AppContext {
    pub fn new(
        expanded_item: (
            ReadSignal<Option<&'static str>>,
            WriteSignal<Option<&'static str>>,
        ),
    ) -> Self {
        Self {
            expanded_item: expanded_item.0,
            set_expanded_item: expanded_item.1,
        }
    }

    /// Collapse whatever card is open
    pub fn collapse(&self) {
        self.set_expanded_item.set(None);
    }

    /// Toggle a card between expanded and collapsed; only one card is
    /// open at a time
    pub fn toggle_expanded(&self, item_id: &'static str) {
        self.set_expanded_item.update(|current| {
            *current = if *current == Some(item_id) {
                None
            } else {
                Some(item_id)
            };
        });
    }
}
