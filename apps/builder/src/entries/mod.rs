// Repeatable entry groups: the three résumé sub-sections a user can add and
// remove at runtime. Group presence lives in the render surface; this module
// holds only the per-kind static tables and the monotonic ordinal counters.

pub mod removal;

use std::collections::HashMap;

use tracing::debug;

use crate::naming;
use crate::surface::{Element, Surface};

/// Marker class carried by every removable group element.
pub const DYNAMIC_ENTRY_CLASS: &str = "dynamic-entry";
/// Marker class the delegated click handler matches on.
pub const REMOVE_BTN_CLASS: &str = "remove-entry-btn";
/// Data attribute on a remove control naming the entry element it detaches.
pub const REMOVE_DATA_KEY: &str = "remove";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Experience,
    Education,
    Project,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [
        GroupKind::Experience,
        GroupKind::Education,
        GroupKind::Project,
    ];

    /// Wire prefix: the leading token of every control name in the group.
    pub fn prefix(self) -> &'static str {
        match self {
            GroupKind::Experience => "experience",
            GroupKind::Education => "education",
            GroupKind::Project => "project",
        }
    }

    /// Container region the kind's groups render into.
    pub fn container_id(self) -> &'static str {
        match self {
            GroupKind::Experience => "experienceEntriesWrapper",
            GroupKind::Education => "educationEntriesWrapper",
            GroupKind::Project => "projectEntriesWrapper",
        }
    }

    pub fn add_button_id(self) -> &'static str {
        match self {
            GroupKind::Experience => "addExperienceBtn",
            GroupKind::Education => "addEducationBtn",
            GroupKind::Project => "addProjectBtn",
        }
    }

    /// Marker class on each rendered group of this kind.
    pub fn entry_class(self) -> &'static str {
        match self {
            GroupKind::Experience => "experience-entry",
            GroupKind::Education => "education-entry",
            GroupKind::Project => "project-entry",
        }
    }

    /// Fixed, ordered field list rendered into each group.
    pub fn field_keys(self) -> &'static [&'static str] {
        match self {
            GroupKind::Experience => &[
                "job_title",
                "company",
                "location",
                "start_date",
                "end_date",
                "responsibilities",
            ],
            GroupKind::Education => &[
                "degree",
                "institution",
                "location",
                "graduation_date",
                "gpa",
            ],
            GroupKind::Project => &["name", "link", "description"],
        }
    }

    /// Field whose non-empty (trimmed) value qualifies a group for the
    /// assembled document.
    pub fn identifying_key(self) -> &'static str {
        match self {
            GroupKind::Experience => "job_title",
            GroupKind::Education => "degree",
            GroupKind::Project => "name",
        }
    }

    /// Field whose value splits into one line per entry, if the kind has one.
    pub fn multiline_key(self) -> Option<&'static str> {
        match self {
            GroupKind::Experience => Some("responsibilities"),
            GroupKind::Education | GroupKind::Project => None,
        }
    }

    pub fn from_add_button(id: &str) -> Option<GroupKind> {
        GroupKind::ALL.into_iter().find(|k| k.add_button_id() == id)
    }
}

/// Per-kind monotonic ordinal counters. Ordinals are never reused within a
/// session, even after removal.
#[derive(Debug)]
pub struct EntryGroupManager {
    counters: HashMap<GroupKind, u32>,
}

impl EntryGroupManager {
    /// Counters start at the number of groups already rendered per kind, so
    /// a pre-populated page keeps numbering where it left off.
    pub fn new(surface: &Surface) -> Self {
        let counters = GroupKind::ALL
            .into_iter()
            .map(|kind| (kind, surface.query_class(kind.entry_class()).len() as u32))
            .collect();
        EntryGroupManager { counters }
    }

    /// Renders a fresh group of `kind` into its container and returns the
    /// new ordinal. A missing container leaves the counter untouched and
    /// returns `None`; other kinds' state is never touched.
    pub fn add_group(&mut self, surface: &mut Surface, kind: GroupKind) -> Option<u32> {
        if surface.by_id(kind.container_id()).is_none() {
            return None;
        }
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        let ordinal = *counter;
        surface.append_child(kind.container_id(), render_group(kind, ordinal));
        debug!(kind = kind.prefix(), ordinal, "entry group added");
        Some(ordinal)
    }
}

/// Builds the group subtree: the header row with its delegated remove
/// control, then one empty control per field in the kind's fixed order.
pub fn render_group(kind: GroupKind, ordinal: u32) -> Element {
    let entry_id = naming::entry_id(kind.prefix(), ordinal);
    let mut group = Element::with_id(&entry_id)
        .class(kind.entry_class())
        .class(DYNAMIC_ENTRY_CLASS)
        .child(
            Element::new().class("subsection-header").child(
                Element::with_id(&format!("remove-{entry_id}"))
                    .class(REMOVE_BTN_CLASS)
                    .data(REMOVE_DATA_KEY, &entry_id),
            ),
        );
    for &key in kind.field_keys() {
        group = group.child(
            Element::new().control(&naming::control_name(kind.prefix(), ordinal, key), ""),
        );
    }
    group
}
