//! Hub Data Model
//!
//! Menu catalog entries plus the persisted per-item interaction state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle status of a hub feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    Stable,
    Testing,
    #[default]
    New,
    Planned,
    Broken,
    Validated,
    InProgress,
    Idea,
    Deprecated,
}

impl ItemStatus {
    /// Every status, in selector display order
    pub const ALL: &'static [ItemStatus] = &[
        ItemStatus::Stable,
        ItemStatus::Validated,
        ItemStatus::Testing,
        ItemStatus::InProgress,
        ItemStatus::New,
        ItemStatus::Idea,
        ItemStatus::Planned,
        ItemStatus::Broken,
        ItemStatus::Deprecated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Stable => "Stable",
            ItemStatus::Testing => "Testing",
            ItemStatus::New => "New",
            ItemStatus::Planned => "Planned",
            ItemStatus::Broken => "Broken",
            ItemStatus::Validated => "Validated",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Idea => "Idea",
            ItemStatus::Deprecated => "Deprecated",
        }
    }

    /// CSS modifier class for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            ItemStatus::Stable => "status-stable",
            ItemStatus::Testing => "status-testing",
            ItemStatus::New => "status-new",
            ItemStatus::Planned => "status-planned",
            ItemStatus::Broken => "status-broken",
            ItemStatus::Validated => "status-validated",
            ItemStatus::InProgress => "status-in-progress",
            ItemStatus::Idea => "status-idea",
            ItemStatus::Deprecated => "status-deprecated",
        }
    }
}

/// Menu category buckets, fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Debug,
    Core,
    Features,
    Tools,
    Experimental,
}

impl Category {
    /// Fixed display order for category sections
    pub const ORDER: &'static [Category] = &[
        Category::Debug,
        Category::Core,
        Category::Features,
        Category::Tools,
        Category::Experimental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Debug => "debug",
            Category::Core => "core",
            Category::Features => "features",
            Category::Tools => "tools",
            Category::Experimental => "experimental",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Debug => "Debug",
            Category::Core => "Core",
            Category::Features => "Features",
            Category::Tools => "Tools",
            Category::Experimental => "Experimental",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Debug => "Diagnostics and inspection surfaces",
            Category::Core => "The sequencer itself",
            Category::Features => "Sound design and arrangement",
            Category::Tools => "Import, export and utilities",
            Category::Experimental => "Prototypes, may break",
        }
    }
}

/// Kind of a checklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckboxType {
    #[default]
    Test,
    Bug,
    Feature,
    Doc,
}

impl CheckboxType {
    pub const ALL: &'static [CheckboxType] = &[
        CheckboxType::Test,
        CheckboxType::Bug,
        CheckboxType::Feature,
        CheckboxType::Doc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckboxType::Test => "Test",
            CheckboxType::Bug => "Bug",
            CheckboxType::Feature => "Feature",
            CheckboxType::Doc => "Doc",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CheckboxType::Test => "cb-test",
            CheckboxType::Bug => "cb-bug",
            CheckboxType::Feature => "cb-feature",
            CheckboxType::Doc => "cb-doc",
        }
    }
}

/// Kind of a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    Info,
    Warning,
    Error,
    Idea,
}

impl NoteType {
    pub const ALL: &'static [NoteType] = &[
        NoteType::Info,
        NoteType::Warning,
        NoteType::Error,
        NoteType::Idea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NoteType::Info => "Info",
            NoteType::Warning => "Warning",
            NoteType::Error => "Error",
            NoteType::Idea => "Idea",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NoteType::Info => "note-info",
            NoteType::Warning => "note-warning",
            NoteType::Error => "note-error",
            NoteType::Idea => "note-idea",
        }
    }
}

/// A static catalog entry: one feature surface of the sequencer project
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    /// Unique id, also the key into the persisted store
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    /// Static status; may be overridden per-item in the persisted store
    pub status: ItemStatus,
    pub category: Category,
    /// Ascending = higher priority within the category
    pub priority: i32,
    pub estimated_time: Option<&'static str>,
    /// Ids of items this one depends on (informational, unenforced)
    pub dependencies: &'static [&'static str],
}

/// A category with its items in display order
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub id: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub items: Vec<MenuItem>,
}

/// A checklist entry owned by one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkbox {
    pub id: String,
    pub label: String,
    pub checked: bool,
    #[serde(rename = "type", default)]
    pub checkbox_type: CheckboxType,
    pub created_at: u64,
    pub updated_at: u64,
}

/// A note, owned by one item or global to the hub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(rename = "type", default)]
    pub note_type: NoteType,
    pub created_at: u64,
    pub updated_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Persisted per-item state: status override, checklist and notes
///
/// The sequences are always present (possibly empty) so accessors never
/// have to null-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(default)]
    pub checkboxes: Vec<Checkbox>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub last_updated: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

/// Hub-wide settings stored inside the document envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSettings {
    #[serde(default = "default_true")]
    pub auto_save: bool,
    #[serde(default = "default_true")]
    pub show_completed_checkboxes: bool,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            show_completed_checkboxes: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// The versioned document written to local storage as one JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubDocument {
    pub version: String,
    #[serde(default)]
    pub last_updated: u64,
    /// item id -> persisted record; BTreeMap keeps exports deterministic
    #[serde(default)]
    pub items: BTreeMap<String, ItemRecord>,
    #[serde(default)]
    pub global_notes: Vec<Note>,
    #[serde(default)]
    pub settings: HubSettings,
}

/// Aggregate counts over the whole document, see `HubStore::stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HubStats {
    pub items: usize,
    pub total_checkboxes: usize,
    pub completed_checkboxes: usize,
    pub total_notes: usize,
    pub global_notes: usize,
    pub last_updated: u64,
}
