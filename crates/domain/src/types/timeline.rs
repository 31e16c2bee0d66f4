//! Timeline entries and the ordered collection that holds them
//!
//! Both `experience` and `education` are most-recent-first lists: new entries
//! go to the front, and removal is by identifier only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::EntryId;
use crate::impl_label_conversions;

/// Which of the two sub-collections an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Experience,
    Education,
}

impl_label_conversions!(TimelineKind {
    Experience => "experience",
    Education => "education",
});

/// Anything that can live in a [`Timeline`]
pub trait TimelineEntry {
    fn id(&self) -> EntryId;
}

/// A position held at a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl TimelineEntry for ExperienceEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

/// A course of study at a school
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl TimelineEntry for EducationEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

/// Insertion-ordered list of entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline<T>(Vec<T>);

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: TimelineEntry> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` as the new first element.
    pub fn prepend(&mut self, entry: T) {
        self.0.insert(0, entry);
    }

    /// Remove the entry whose id equals `id`.
    ///
    /// Returns `None` and leaves the list untouched when no entry matches.
    pub fn remove_by_id(&mut self, id: EntryId) -> Option<T> {
        let position = self.position(id)?;
        Some(self.0.remove(position))
    }

    /// Index of the entry with `id`, scanning from the front.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.0.iter().position(|entry| entry.id() == id)
    }

    pub fn entries(&self) -> &[T] {
        &self.0
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.0.iter().map(TimelineEntry::id).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<Vec<T>> for Timeline<T> {
    fn from(entries: Vec<T>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: EntryId::new(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut timeline = Timeline::new();
        let first = entry("first");
        let second = entry("second");
        timeline.prepend(first.clone());
        timeline.prepend(second.clone());
        assert_eq!(timeline.ids(), vec![second.id, first.id]);
    }

    #[test]
    fn remove_missing_id_keeps_every_entry() {
        let (a, b, c) = (entry("a"), entry("b"), entry("c"));
        let mut timeline = Timeline::from(vec![a.clone(), b.clone(), c.clone()]);

        assert!(timeline.remove_by_id(EntryId::new()).is_none());
        assert_eq!(timeline.entries(), &[a, b, c]);
    }

    #[test]
    fn remove_existing_id_preserves_relative_order() {
        let (a, b, c) = (entry("a"), entry("b"), entry("c"));
        let mut timeline = Timeline::from(vec![a.clone(), b.clone(), c.clone()]);

        let removed = timeline.remove_by_id(b.id).expect("b is present");
        assert_eq!(removed, b);
        assert_eq!(timeline.entries(), &[a, c]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let timeline = Timeline::from(vec![entry("a")]);
        let json = serde_json::to_value(&timeline).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["title"], "a");
        assert_eq!(json[0]["from"], "2020-01-01");
    }
}
