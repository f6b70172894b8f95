use std::path::Path;

use chrono::Weekday;
use log::error;

use crate::item::ScheduleItem;
use crate::locale::Locale;
use crate::persistence::{self, PersistenceError, PersistenceResult};

/// The weekly schedule: an ordered collection of items. Insertion order is
/// preserved except where a query explicitly sorts its result.
#[derive(Debug, Default)]
pub struct Schedule {
    items: Vec<ScheduleItem>,
}

impl Schedule {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item at the end.
    pub fn add(&mut self, item: ScheduleItem) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item` by value; no-op when absent.
    pub fn remove(&mut self, item: &ScheduleItem) {
        if let Some(pos) = self.items.iter().position(|existing| existing == item) {
            self.items.remove(pos);
        }
    }

    /// All items in insertion order, as a borrowed view.
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// Items for one day, ascending by time. The sort is stable, so entries
    /// with equal times keep their insertion order.
    pub fn for_day(&self, day: Weekday) -> Vec<ScheduleItem> {
        let mut matches: Vec<ScheduleItem> = self
            .items
            .iter()
            .filter(|item| item.day == day)
            .cloned()
            .collect();
        matches.sort_by_key(|item| item.time);
        matches
    }

    /// Render a list of items one line per item; an empty list renders the
    /// locale's empty-schedule notice instead of an empty string.
    pub fn render(items: &[ScheduleItem], locale: &Locale) -> String {
        if items.is_empty() {
            return locale.empty_notice().to_string();
        }
        items
            .iter()
            .map(|item| item.format_line(locale))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the collection to `path` in the comma-delimited text format.
    /// An empty path is an invalid-argument error surfaced to the caller;
    /// any persistence failure is logged and swallowed, and the in-memory
    /// collection is never modified.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PersistenceError::InvalidData("empty file path".into()));
        }
        if let Err(err) = persistence::save_items_to_csv(&self.items, path) {
            error!("failed to save schedule to {}: {err}", path.display());
        }
        Ok(())
    }

    /// Replace the collection with the contents of `path`. The collection is
    /// cleared before the read on every path, so a failed read leaves it
    /// empty. Persistence failures are logged and swallowed; only an empty
    /// path is surfaced to the caller.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> PersistenceResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PersistenceError::InvalidData("empty file path".into()));
        }
        self.items.clear();
        match persistence::load_items_from_csv(path) {
            Ok(items) => self.items = items,
            Err(err) => error!("failed to load schedule from {}: {err}", path.display()),
        }
        Ok(())
    }
}
