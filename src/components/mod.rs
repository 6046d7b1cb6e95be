//! UI Components
//!
//! Reusable Leptos components.

mod category_section;
mod checklist_section;
mod data_panel;
mod delete_confirm_button;
mod feature_card;
mod global_notes;
mod notes_section;
mod stats_bar;
mod status_selector;
mod title_bar;

pub use category_section::CategorySection;
pub use checklist_section::ChecklistSection;
pub use data_panel::DataPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use feature_card::FeatureCard;
pub use global_notes::GlobalNotesPanel;
pub use notes_section::NotesSection;
pub use stats_bar::StatsBar;
pub use status_selector::StatusSelector;
pub use title_bar::TitleBar;
