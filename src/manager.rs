//! Persistence Manager
//!
//! `HubStore` is the sole mediator between UI components and the
//! key/value store. It owns the in-memory `HubDocument` and every
//! read/write goes through it. One instance is constructed in `App`
//! and provided to the component tree via context; reads inside
//! reactive closures track the document signal, so the UI re-renders
//! after every mutation.

use std::rc::Rc;

use leptos::prelude::*;

use crate::ids::{generate_id, now_millis};
use crate::models::{
    Checkbox, CheckboxType, HubDocument, HubSettings, HubStats, ItemStatus, MenuItem, Note,
    NoteType,
};
use crate::storage::{BrowserStorage, KeyValueStore, NullStore};

/// Stored documents must carry exactly this version; anything else is
/// discarded wholesale. No migration chain exists.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// The single local-storage key the document lives under
pub const STORAGE_KEY: &str = "sequencer-hub-state";

/// Shared handle to the persisted hub state
///
/// Copy, like a signal: all copies see the same document. The storage
/// backend is kept in local (thread-bound) storage because browser
/// handles are not `Send`; every operation runs on the UI thread.
#[derive(Clone, Copy)]
pub struct HubStore {
    doc: RwSignal<HubDocument>,
    store: StoredValue<Rc<dyn KeyValueStore>, LocalStorage>,
    persistent: bool,
}

/// Get the shared store from context
pub fn use_hub_store() -> HubStore {
    expect_context::<HubStore>()
}

fn default_document() -> HubDocument {
    HubDocument {
        version: SCHEMA_VERSION.to_string(),
        last_updated: now_millis(),
        items: Default::default(),
        global_notes: Vec::new(),
        settings: HubSettings::default(),
    }
}

/// Read and validate the stored document; any problem means defaults.
fn load_from(store: &dyn KeyValueStore) -> HubDocument {
    let raw = match store.get(STORAGE_KEY) {
        Some(raw) => raw,
        None => return default_document(),
    };
    match serde_json::from_str::<HubDocument>(&raw) {
        Ok(doc) if doc.version == SCHEMA_VERSION => doc,
        Ok(doc) => {
            log::warn!(
                "stored hub state has version {} (expected {}), resetting",
                doc.version,
                SCHEMA_VERSION
            );
            default_document()
        }
        Err(err) => {
            log::warn!("stored hub state unreadable, resetting: {}", err);
            default_document()
        }
    }
}

impl HubStore {
    /// Load from the given store, or start from defaults
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let doc = load_from(&*store);
        Self {
            doc: RwSignal::new(doc),
            store: StoredValue::new_local(store),
            persistent: true,
        }
    }

    /// Browser local storage when available, otherwise the no-op store
    /// (first render outside a browser is a normal condition)
    pub fn browser() -> Self {
        match BrowserStorage::new() {
            Some(storage) => Self::new(Rc::new(storage)),
            None => {
                log::warn!("local storage unavailable, state will not persist");
                let mut hub = Self::new(Rc::new(NullStore));
                hub.persistent = false;
                hub
            }
        }
    }

    /// False when running without a persistent medium
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    // ---- persistence ----

    /// Write the document to the store. Failures are logged, never raised.
    fn save(&self) {
        let raw = {
            let mut doc = self.doc.write();
            doc.last_updated = now_millis();
            match serde_json::to_string(&*doc) {
                Ok(raw) => raw,
                Err(err) => {
                    log::error!("failed to serialize hub state: {}", err);
                    return;
                }
            }
        };
        let result = self.store.with_value(|store| store.set(STORAGE_KEY, &raw));
        if let Err(err) = result {
            log::warn!("failed to persist hub state: {}", err);
        }
    }

    fn autosave(&self) {
        if self.doc.read_untracked().settings.auto_save {
            self.save();
        }
    }

    /// Persist regardless of the auto-save setting
    pub fn force_save(&self) {
        self.save();
    }

    /// Re-read from the store, discarding unsaved in-memory state
    pub fn reload_from_storage(&self) {
        let doc = self.store.with_value(|store| load_from(&**store));
        self.doc.set(doc);
    }

    // ---- item status ----

    /// Per-item override, if one was ever set
    pub fn item_status(&self, item_id: &str) -> Option<ItemStatus> {
        self.doc.read().items.get(item_id).and_then(|r| r.status)
    }

    /// Override or the catalog's static status
    pub fn effective_status(&self, item: &MenuItem) -> ItemStatus {
        self.item_status(item.id).unwrap_or(item.status)
    }

    pub fn set_item_status(&self, item_id: &str, status: ItemStatus) {
        {
            let mut doc = self.doc.write();
            let now = now_millis();
            let record = doc.items.entry(item_id.to_string()).or_default();
            record.status = Some(status);
            record.last_updated = now;
            doc.last_updated = now;
        }
        self.autosave();
    }

    // ---- checkboxes ----

    /// Checklist of an item, in insertion order
    pub fn item_checkboxes(&self, item_id: &str) -> Vec<Checkbox> {
        self.doc
            .read()
            .items
            .get(item_id)
            .map(|r| r.checkboxes.clone())
            .unwrap_or_default()
    }

    pub fn add_checkbox(
        &self,
        item_id: &str,
        label: &str,
        checked: bool,
        checkbox_type: CheckboxType,
    ) -> Checkbox {
        let checkbox = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let checkbox = Checkbox {
                id: generate_id("cb"),
                label: label.to_string(),
                checked,
                checkbox_type,
                created_at: now,
                updated_at: now,
            };
            let record = doc.items.entry(item_id.to_string()).or_default();
            record.checkboxes.push(checkbox.clone());
            record.last_updated = now;
            doc.last_updated = now;
            checkbox
        };
        self.autosave();
        checkbox
    }

    /// Flip a checkbox and return its new value; false when the item or
    /// checkbox does not exist.
    pub fn toggle_checkbox(&self, item_id: &str, checkbox_id: &str) -> bool {
        let toggled = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let Some(record) = doc.items.get_mut(item_id) else {
                return false;
            };
            let Some(checkbox) = record.checkboxes.iter_mut().find(|c| c.id == checkbox_id)
            else {
                return false;
            };
            checkbox.checked = !checkbox.checked;
            checkbox.updated_at = now;
            let new_value = checkbox.checked;
            record.last_updated = now;
            doc.last_updated = now;
            new_value
        };
        self.autosave();
        toggled
    }

    pub fn remove_checkbox(&self, item_id: &str, checkbox_id: &str) -> bool {
        let removed = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let Some(record) = doc.items.get_mut(item_id) else {
                return false;
            };
            let before = record.checkboxes.len();
            record.checkboxes.retain(|c| c.id != checkbox_id);
            if record.checkboxes.len() == before {
                return false;
            }
            record.last_updated = now;
            doc.last_updated = now;
            true
        };
        self.autosave();
        removed
    }

    // ---- notes ----

    /// Notes of an item, in insertion order
    pub fn item_notes(&self, item_id: &str) -> Vec<Note> {
        self.doc
            .read()
            .items
            .get(item_id)
            .map(|r| r.notes.clone())
            .unwrap_or_default()
    }

    pub fn add_note(
        &self,
        item_id: &str,
        content: &str,
        note_type: NoteType,
        author: Option<String>,
    ) -> Note {
        let note = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let note = Note {
                id: generate_id("note"),
                content: content.to_string(),
                note_type,
                created_at: now,
                updated_at: now,
                author,
            };
            let record = doc.items.entry(item_id.to_string()).or_default();
            record.notes.push(note.clone());
            record.last_updated = now;
            doc.last_updated = now;
            note
        };
        self.autosave();
        note
    }

    /// Replace a note's content; false when the item or note is absent
    pub fn update_note(&self, item_id: &str, note_id: &str, content: &str) -> bool {
        let updated = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let Some(record) = doc.items.get_mut(item_id) else {
                return false;
            };
            let Some(note) = record.notes.iter_mut().find(|n| n.id == note_id) else {
                return false;
            };
            note.content = content.to_string();
            note.updated_at = now;
            record.last_updated = now;
            doc.last_updated = now;
            true
        };
        self.autosave();
        updated
    }

    pub fn remove_note(&self, item_id: &str, note_id: &str) -> bool {
        let removed = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let Some(record) = doc.items.get_mut(item_id) else {
                return false;
            };
            let before = record.notes.len();
            record.notes.retain(|n| n.id != note_id);
            if record.notes.len() == before {
                return false;
            }
            record.last_updated = now;
            doc.last_updated = now;
            true
        };
        self.autosave();
        removed
    }

    // ---- global notes ----

    pub fn global_notes(&self) -> Vec<Note> {
        self.doc.read().global_notes.clone()
    }

    pub fn add_global_note(
        &self,
        content: &str,
        note_type: NoteType,
        author: Option<String>,
    ) -> Note {
        let note = {
            let mut doc = self.doc.write();
            let now = now_millis();
            let note = Note {
                id: generate_id("note"),
                content: content.to_string(),
                note_type,
                created_at: now,
                updated_at: now,
                author,
            };
            doc.global_notes.push(note.clone());
            doc.last_updated = now;
            note
        };
        self.autosave();
        note
    }

    pub fn remove_global_note(&self, note_id: &str) -> bool {
        let removed = {
            let mut doc = self.doc.write();
            let before = doc.global_notes.len();
            doc.global_notes.retain(|n| n.id != note_id);
            if doc.global_notes.len() == before {
                return false;
            }
            doc.last_updated = now_millis();
            true
        };
        self.autosave();
        removed
    }

    // ---- aggregates / maintenance ----

    /// Counts over the whole document; pure read
    pub fn stats(&self) -> HubStats {
        let doc = self.doc.read();
        let mut stats = HubStats {
            items: doc.items.len(),
            global_notes: doc.global_notes.len(),
            last_updated: doc.last_updated,
            ..Default::default()
        };
        for record in doc.items.values() {
            stats.total_checkboxes += record.checkboxes.len();
            stats.completed_checkboxes += record.checkboxes.iter().filter(|c| c.checked).count();
            stats.total_notes += record.notes.len();
        }
        stats
    }

    /// Full pretty-printed serialization, e.g. for a backup download
    pub fn export_data(&self) -> String {
        let doc = self.doc.read();
        serde_json::to_string_pretty(&*doc).unwrap_or_else(|err| {
            log::error!("failed to export hub state: {}", err);
            String::from("{}")
        })
    }

    /// Replace the whole document from a serialized payload.
    ///
    /// Requires top-level `version` and `items` keys; on any failure the
    /// current state is left untouched and false is returned.
    pub fn import_data(&self, raw: &str) -> bool {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("import rejected, not valid JSON: {}", err);
                return false;
            }
        };
        if value.get("version").is_none() || value.get("items").is_none() {
            log::warn!("import rejected, missing version or items");
            return false;
        }
        match serde_json::from_value::<HubDocument>(value) {
            Ok(doc) => {
                self.doc.set(doc);
                self.save();
                true
            }
            Err(err) => {
                log::warn!("import rejected, shape mismatch: {}", err);
                false
            }
        }
    }

    /// Reset to a fresh default document and persist it
    pub fn clear_all_data(&self) {
        self.doc.set(default_document());
        self.save();
    }

    // ---- settings ----

    pub fn settings(&self) -> HubSettings {
        self.doc.read().settings.clone()
    }

    pub fn set_auto_save(&self, auto_save: bool) {
        self.doc.write().settings.auto_save = auto_save;
        // persists even when autosave was just switched off
        self.save();
    }

    pub fn set_show_completed(&self, show: bool) {
        self.doc.write().settings.show_completed_checkboxes = show;
        self.autosave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::HubDocument;
    use crate::storage::MemoryStore;
    use std::collections::HashSet;

    fn setup() -> (Rc<MemoryStore>, HubStore) {
        let mem = Rc::new(MemoryStore::new());
        let hub = HubStore::new(mem.clone());
        (mem, hub)
    }

    #[test]
    fn added_checkboxes_keep_call_order_and_unique_ids() {
        let (_, hub) = setup();
        let added: Vec<Checkbox> = (0..5)
            .map(|i| hub.add_checkbox("mixer", &format!("task {}", i), false, CheckboxType::Test))
            .collect();

        let ids: HashSet<&str> = added.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 5);

        let stored = hub.item_checkboxes("mixer");
        let stored_ids: Vec<&str> = stored.iter().map(|c| c.id.as_str()).collect();
        let added_ids: Vec<&str> = added.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(stored_ids, added_ids);
    }

    #[test]
    fn toggle_is_an_involution() {
        let (_, hub) = setup();
        let cb = hub.add_checkbox("mixer", "pan law", false, CheckboxType::Bug);

        assert!(hub.toggle_checkbox("mixer", &cb.id));
        let after_first = hub.item_checkboxes("mixer")[0].clone();
        assert!(after_first.checked);
        assert!(after_first.updated_at >= cb.updated_at);

        assert!(!hub.toggle_checkbox("mixer", &cb.id));
        let after_second = hub.item_checkboxes("mixer")[0].clone();
        assert!(!after_second.checked);
        assert!(after_second.updated_at >= after_first.updated_at);
    }

    #[test]
    fn toggle_on_unknown_ids_is_a_silent_false() {
        let (_, hub) = setup();
        hub.add_checkbox("mixer", "a", false, CheckboxType::Test);
        let before = hub.stats();

        assert!(!hub.toggle_checkbox("mixer", "cb-missing"));
        assert!(!hub.toggle_checkbox("no-such-item", "cb-missing"));
        assert_eq!(hub.stats().completed_checkboxes, before.completed_checkboxes);
    }

    #[test]
    fn remove_checkbox_present_and_absent() {
        let (_, hub) = setup();
        let cb = hub.add_checkbox("transport", "loop points", false, CheckboxType::Feature);

        assert!(hub.remove_checkbox("transport", &cb.id));
        assert!(hub.item_checkboxes("transport").is_empty());

        let before = hub.stats();
        assert!(!hub.remove_checkbox("transport", &cb.id));
        assert_eq!(hub.stats().total_checkboxes, before.total_checkboxes);
    }

    #[test]
    fn notes_add_update_remove() {
        let (_, hub) = setup();
        let note = hub.add_note("synth-engine", "detune drifts", NoteType::Warning, None);
        assert_eq!(hub.item_notes("synth-engine").len(), 1);

        assert!(hub.update_note("synth-engine", &note.id, "detune fixed"));
        let updated = hub.item_notes("synth-engine")[0].clone();
        assert_eq!(updated.content, "detune fixed");
        assert!(updated.updated_at >= note.updated_at);

        assert!(!hub.update_note("synth-engine", "note-missing", "x"));
        assert!(!hub.update_note("no-such-item", &note.id, "x"));

        assert!(hub.remove_note("synth-engine", &note.id));
        assert!(hub.item_notes("synth-engine").is_empty());
        assert!(!hub.remove_note("synth-engine", &note.id));
    }

    #[test]
    fn global_notes_live_on_the_envelope() {
        let (_, hub) = setup();
        let note = hub.add_global_note("ship 0.2 this week", NoteType::Info, Some("liv".into()));
        assert_eq!(hub.global_notes().len(), 1);
        assert_eq!(hub.stats().global_notes, 1);
        assert_eq!(hub.stats().items, 0);

        assert!(hub.remove_global_note(&note.id));
        assert!(!hub.remove_global_note(&note.id));
        assert!(hub.global_notes().is_empty());
    }

    #[test]
    fn piano_roll_checkbox_scenario() {
        let (_, hub) = setup();
        let cb = hub.add_checkbox("piano-roll", "verify playback", false, CheckboxType::Test);

        let checkboxes = hub.item_checkboxes("piano-roll");
        assert_eq!(checkboxes.len(), 1);
        assert!(!checkboxes[0].checked);

        assert!(hub.toggle_checkbox("piano-roll", &cb.id));
        assert_eq!(hub.stats().completed_checkboxes, 1);
    }

    #[test]
    fn status_override_beats_catalog_static() {
        let (_, hub) = setup();
        let item = catalog::find_item("piano-roll").unwrap();
        assert_eq!(hub.item_status("piano-roll"), None);
        assert_eq!(hub.effective_status(item), ItemStatus::Stable);

        hub.set_item_status("piano-roll", ItemStatus::Broken);
        assert_eq!(hub.item_status("piano-roll"), Some(ItemStatus::Broken));
        assert_eq!(hub.effective_status(item), ItemStatus::Broken);
    }

    #[test]
    fn import_of_export_preserves_stats() {
        let (_, hub) = setup();
        hub.set_item_status("mixer", ItemStatus::Testing);
        let cb = hub.add_checkbox("mixer", "gain staging", false, CheckboxType::Test);
        hub.toggle_checkbox("mixer", &cb.id);
        hub.add_note("mixer", "sends clip at +6dB", NoteType::Error, None);
        hub.add_global_note("demo song for NAMM", NoteType::Idea, None);

        let before = hub.stats();
        assert!(hub.import_data(&hub.export_data()));
        let after = hub.stats();

        assert_eq!(after.items, before.items);
        assert_eq!(after.total_checkboxes, before.total_checkboxes);
        assert_eq!(after.completed_checkboxes, before.completed_checkboxes);
        assert_eq!(after.total_notes, before.total_notes);
        assert_eq!(after.global_notes, before.global_notes);
    }

    #[test]
    fn import_without_items_is_rejected() {
        let (_, hub) = setup();
        hub.add_checkbox("mixer", "a", true, CheckboxType::Test);
        let before = hub.stats();

        assert!(!hub.import_data(r#"{"version":"1.0.0"}"#));
        assert!(!hub.import_data(r#"{"items":{}}"#));
        assert!(!hub.import_data("not json at all"));

        let after = hub.stats();
        assert_eq!(after.total_checkboxes, before.total_checkboxes);
        assert_eq!(after.completed_checkboxes, before.completed_checkboxes);
    }

    #[test]
    fn version_mismatch_loads_as_if_cleared() {
        let mem = Rc::new(MemoryStore::new());
        let stale = r#"{
            "version": "0.9.0",
            "lastUpdated": 123,
            "items": {
                "mixer": { "status": "broken", "checkboxes": [], "notes": [], "lastUpdated": 123 }
            },
            "globalNotes": [],
            "settings": { "autoSave": false, "showCompletedCheckboxes": false }
        }"#;
        mem.set(STORAGE_KEY, stale).unwrap();

        let hub = HubStore::new(mem);
        let stats = hub.stats();
        assert_eq!(stats.items, 0);
        assert_eq!(stats.global_notes, 0);
        assert_eq!(hub.settings(), HubSettings::default());
        assert_eq!(hub.item_status("mixer"), None);
    }

    #[test]
    fn malformed_payload_loads_as_defaults() {
        let mem = Rc::new(MemoryStore::new());
        mem.set(STORAGE_KEY, "{{{ definitely not json").unwrap();

        let hub = HubStore::new(mem);
        assert_eq!(hub.stats().items, 0);
        assert_eq!(hub.settings(), HubSettings::default());
    }

    #[test]
    fn mutations_are_autosaved_and_survive_reload() {
        let (mem, hub) = setup();
        hub.add_checkbox("piano-roll", "verify playback", false, CheckboxType::Test);

        let reopened = HubStore::new(mem);
        assert_eq!(reopened.item_checkboxes("piano-roll").len(), 1);
    }

    #[test]
    fn autosave_off_waits_for_force_save() {
        let (_, hub) = setup();
        hub.set_auto_save(false);

        hub.add_checkbox("mixer", "unsaved", false, CheckboxType::Test);
        hub.reload_from_storage();
        assert!(hub.item_checkboxes("mixer").is_empty());

        hub.add_checkbox("mixer", "saved", false, CheckboxType::Test);
        hub.force_save();
        hub.reload_from_storage();
        assert_eq!(hub.item_checkboxes("mixer").len(), 1);
        assert_eq!(hub.item_checkboxes("mixer")[0].label, "saved");
    }

    #[test]
    fn unavailable_store_degrades_without_panicking() {
        let hub = HubStore::new(Rc::new(NullStore));
        let cb = hub.add_checkbox("mixer", "in memory only", false, CheckboxType::Test);
        assert!(hub.toggle_checkbox("mixer", &cb.id));
        hub.force_save();
        assert_eq!(hub.stats().total_checkboxes, 1);

        hub.reload_from_storage();
        assert_eq!(hub.stats().total_checkboxes, 0);
    }

    #[test]
    fn clear_all_data_resets_and_persists() {
        let (mem, hub) = setup();
        hub.set_item_status("mixer", ItemStatus::Broken);
        hub.add_global_note("note", NoteType::Info, None);

        hub.clear_all_data();
        assert_eq!(hub.stats().items, 0);
        assert_eq!(hub.stats().global_notes, 0);

        let reopened = HubStore::new(mem);
        assert_eq!(reopened.stats().items, 0);
    }

    #[test]
    fn export_is_a_valid_current_version_document() {
        let (_, hub) = setup();
        hub.add_note("transport", "tap tempo rounds badly", NoteType::Warning, None);

        let doc: HubDocument = serde_json::from_str(&hub.export_data()).unwrap();
        assert_eq!(doc.version, SCHEMA_VERSION);
        assert_eq!(doc.items["transport"].notes.len(), 1);
    }

    #[test]
    fn envelope_timestamp_moves_on_mutation() {
        let (_, hub) = setup();
        let before = hub.stats().last_updated;
        hub.set_item_status("mixer", ItemStatus::Validated);
        assert!(hub.stats().last_updated >= before);
    }
}
