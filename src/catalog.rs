//! Menu Catalog
//!
//! The static list of hub entries and the pure grouping function that
//! buckets them into display categories. Nothing here touches storage;
//! status overrides live in the persistence manager.

use crate::models::{Category, ItemStatus, MenuCategory, MenuItem};

/// Every feature surface of the sequencer project, one entry per card.
///
/// `priority` sorts ascending within a category. Dependencies are
/// informational only.
pub const MENU_ITEMS: &[MenuItem] = &[
    // Debug
    MenuItem {
        id: "debug-console",
        title: "Debug Console",
        description: "Live engine log with level filters",
        href: "/debug/console",
        status: ItemStatus::Stable,
        category: Category::Debug,
        priority: 1,
        estimated_time: None,
        dependencies: &[],
    },
    MenuItem {
        id: "event-inspector",
        title: "MIDI Event Inspector",
        description: "Inspect the scheduled event queue per tick",
        href: "/debug/events",
        status: ItemStatus::Testing,
        category: Category::Debug,
        priority: 2,
        estimated_time: None,
        dependencies: &["transport"],
    },
    MenuItem {
        id: "latency-probe",
        title: "Latency Probe",
        description: "Measure audio round-trip latency",
        href: "/debug/latency",
        status: ItemStatus::Validated,
        category: Category::Debug,
        priority: 3,
        estimated_time: None,
        dependencies: &[],
    },
    // Core
    MenuItem {
        id: "transport",
        title: "Transport",
        description: "Play, stop, loop and tempo control",
        href: "/transport",
        status: ItemStatus::Stable,
        category: Category::Core,
        priority: 1,
        estimated_time: None,
        dependencies: &[],
    },
    MenuItem {
        id: "piano-roll",
        title: "Piano Roll",
        description: "Note editing grid with velocity lane",
        href: "/piano-roll",
        status: ItemStatus::Stable,
        category: Category::Core,
        priority: 2,
        estimated_time: None,
        dependencies: &["transport"],
    },
    MenuItem {
        id: "step-sequencer",
        title: "Step Sequencer",
        description: "16-step drum pattern grid",
        href: "/steps",
        status: ItemStatus::Stable,
        category: Category::Core,
        priority: 3,
        estimated_time: None,
        dependencies: &["transport"],
    },
    MenuItem {
        id: "pattern-chain",
        title: "Pattern Chainer",
        description: "Chain patterns into full arrangements",
        href: "/chains",
        status: ItemStatus::InProgress,
        category: Category::Core,
        priority: 4,
        estimated_time: Some("2d"),
        dependencies: &["step-sequencer"],
    },
    MenuItem {
        id: "mixer",
        title: "Mixer",
        description: "Per-track gain, pan and sends",
        href: "/mixer",
        status: ItemStatus::Testing,
        category: Category::Core,
        priority: 5,
        estimated_time: None,
        dependencies: &[],
    },
    // Features
    MenuItem {
        id: "synth-engine",
        title: "Synth Engine",
        description: "Two-oscillator subtractive synth voice",
        href: "/synth",
        status: ItemStatus::Stable,
        category: Category::Features,
        priority: 1,
        estimated_time: None,
        dependencies: &[],
    },
    MenuItem {
        id: "sample-browser",
        title: "Sample Browser",
        description: "Browse and audition the sample library",
        href: "/samples",
        status: ItemStatus::New,
        category: Category::Features,
        priority: 2,
        estimated_time: None,
        dependencies: &[],
    },
    MenuItem {
        id: "automation-lanes",
        title: "Automation Lanes",
        description: "Draw parameter automation over time",
        href: "/automation",
        status: ItemStatus::InProgress,
        category: Category::Features,
        priority: 3,
        estimated_time: Some("3d"),
        dependencies: &["piano-roll", "mixer"],
    },
    MenuItem {
        id: "arpeggiator",
        title: "Arpeggiator",
        description: "Pattern-based chord arpeggiation",
        href: "/arp",
        status: ItemStatus::Idea,
        category: Category::Features,
        priority: 4,
        estimated_time: None,
        dependencies: &["synth-engine"],
    },
    MenuItem {
        id: "swing-groove",
        title: "Swing & Groove",
        description: "Global swing amount and groove templates",
        href: "/groove",
        status: ItemStatus::Broken,
        category: Category::Features,
        priority: 5,
        estimated_time: Some("4h"),
        dependencies: &["transport"],
    },
    // Tools
    MenuItem {
        id: "midi-import",
        title: "MIDI Import",
        description: "Import .mid files into patterns",
        href: "/tools/midi-import",
        status: ItemStatus::Stable,
        category: Category::Tools,
        priority: 1,
        estimated_time: None,
        dependencies: &[],
    },
    MenuItem {
        id: "audio-export",
        title: "Audio Export",
        description: "Render the arrangement to wav",
        href: "/tools/export",
        status: ItemStatus::Testing,
        category: Category::Tools,
        priority: 2,
        estimated_time: Some("1d"),
        dependencies: &["mixer"],
    },
    MenuItem {
        id: "project-backup",
        title: "Project Backup",
        description: "Download and restore project snapshots",
        href: "/tools/backup",
        status: ItemStatus::New,
        category: Category::Tools,
        priority: 3,
        estimated_time: None,
        dependencies: &[],
    },
    // Experimental
    MenuItem {
        id: "collab-session",
        title: "Collab Session",
        description: "Shared editing session (unimplemented)",
        href: "/lab/collab",
        status: ItemStatus::Planned,
        category: Category::Experimental,
        priority: 1,
        estimated_time: None,
        dependencies: &[],
    },
    MenuItem {
        id: "ai-melody",
        title: "Melody Suggestions",
        description: "Generated melody variations for a pattern",
        href: "/lab/melody",
        status: ItemStatus::Idea,
        category: Category::Experimental,
        priority: 2,
        estimated_time: None,
        dependencies: &["piano-roll"],
    },
    MenuItem {
        id: "modular-rack",
        title: "Modular Rack",
        description: "Patchable module rack, superseded by the synth engine",
        href: "/lab/rack",
        status: ItemStatus::Deprecated,
        category: Category::Experimental,
        priority: 3,
        estimated_time: None,
        dependencies: &[],
    },
];

/// Bucket items into categories for display.
///
/// Buckets follow `Category::ORDER`, empty buckets are dropped, and each
/// bucket is stable-sorted ascending by priority (ties keep source order).
pub fn group_by_category(items: &[MenuItem]) -> Vec<MenuCategory> {
    Category::ORDER
        .iter()
        .filter_map(|&category| {
            let mut bucket: Vec<MenuItem> = items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect();
            if bucket.is_empty() {
                return None;
            }
            bucket.sort_by_key(|item| item.priority);
            Some(MenuCategory {
                id: category,
                title: category.title(),
                description: category.description(),
                items: bucket,
            })
        })
        .collect()
}

/// Look up a catalog entry by id
pub fn find_item(id: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &'static str, category: Category, priority: i32) -> MenuItem {
        MenuItem {
            id,
            title: id,
            description: "",
            href: "/",
            status: ItemStatus::New,
            category,
            priority,
            estimated_time: None,
            dependencies: &[],
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = MENU_ITEMS.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MENU_ITEMS.len());
    }

    #[test]
    fn piano_roll_is_a_stable_core_item() {
        let item = find_item("piano-roll").expect("piano-roll in catalog");
        assert_eq!(item.status, ItemStatus::Stable);
        assert_eq!(item.category, Category::Core);
    }

    #[test]
    fn categories_come_out_in_fixed_order() {
        let grouped = group_by_category(MENU_ITEMS);
        let order: Vec<Category> = grouped.iter().map(|c| c.id).collect();
        assert_eq!(
            order,
            vec![
                Category::Debug,
                Category::Core,
                Category::Features,
                Category::Tools,
                Category::Experimental,
            ]
        );
    }

    #[test]
    fn items_sort_ascending_by_priority() {
        let items = vec![
            item("c", Category::Core, 3),
            item("a", Category::Core, 1),
            item("b", Category::Core, 2),
        ];
        let grouped = group_by_category(&items);
        assert_eq!(grouped.len(), 1);
        let ids: Vec<&str> = grouped[0].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_priority_keeps_source_order() {
        let items = vec![
            item("first", Category::Tools, 1),
            item("second", Category::Tools, 1),
            item("third", Category::Tools, 1),
        ];
        let grouped = group_by_category(&items);
        let ids: Vec<&str> = grouped[0].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_buckets_are_dropped() {
        let items = vec![
            item("x", Category::Experimental, 1),
            item("d", Category::Debug, 1),
        ];
        let grouped = group_by_category(&items);
        let order: Vec<Category> = grouped.iter().map(|c| c.id).collect();
        assert_eq!(order, vec![Category::Debug, Category::Experimental]);
    }

    #[test]
    fn mixed_categories_and_priorities() {
        let items = vec![
            item("t2", Category::Tools, 9),
            item("c1", Category::Core, 2),
            item("f1", Category::Features, 5),
            item("t1", Category::Tools, 1),
            item("c2", Category::Core, 7),
            item("d1", Category::Debug, 4),
            item("e1", Category::Experimental, 1),
            item("f2", Category::Features, 1),
        ];
        let grouped = group_by_category(&items);
        let flat: Vec<&str> = grouped
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .collect();
        assert_eq!(flat, vec!["d1", "c1", "c2", "f2", "f1", "t1", "t2", "e1"]);
    }
}
