//! In-memory birthday list with a single selection.
//!
//! Entries keep insertion order. The selection is held by id and is dropped
//! whenever the entry it points at is removed.

use chrono::{DateTime, Utc};

use crate::models::birthday::{BirthdayEntry, BirthdayId, ValidationError};
use crate::utils::date::parse_date_time_input;

/// Owns every birthday entry for the lifetime of the widget.
#[derive(Debug)]
pub struct BirthdayRegistry {
    entries: Vec<BirthdayEntry>,
    next_id: u64,
    selection: Option<BirthdayId>,
}

impl Default for BirthdayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BirthdayRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            selection: None,
        }
    }

    /// Add a birthday from form input. `date_time` is Moscow wall time as
    /// typed; see [`parse_date_time_input`] for accepted shapes.
    ///
    /// Nothing is stored when validation fails.
    pub fn add(&mut self, name: &str, date_time: &str) -> Result<BirthdayId, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if date_time.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }

        let date = parse_date_time_input(date_time)
            .ok_or_else(|| ValidationError::InvalidDate(date_time.trim().to_string()))?;

        self.add_entry(name, date)
    }

    /// Add a birthday when the caller already has the instant.
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<BirthdayId, ValidationError> {
        let id = BirthdayId(self.next_id);
        let entry = BirthdayEntry::new(id, name, date)?;
        self.next_id += 1;

        log::info!("add: stored birthday {} ({}) at {}", id, entry.name, entry.date);
        self.entries.push(entry);
        Ok(id)
    }

    /// Remove an entry. Unknown ids are ignored. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: BirthdayId) -> bool {
        let Some(idx) = self.entries.iter().position(|entry| entry.id == id) else {
            log::debug!("remove: birthday {} not found", id);
            return false;
        };

        let entry = self.entries.remove(idx);
        if self.selection == Some(id) {
            self.selection = None;
        }
        log::info!("remove: removed birthday {} ({})", id, entry.name);
        true
    }

    /// Focus an entry. Selecting an id that is not present is a caller bug;
    /// it is logged and the current selection is kept.
    pub fn select(&mut self, id: BirthdayId) -> bool {
        if self.get(id).is_none() {
            log::warn!("select: birthday {} is not in the registry", id);
            return false;
        }
        self.selection = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn entries(&self) -> &[BirthdayEntry] {
        &self.entries
    }

    pub fn get(&self, id: BirthdayId) -> Option<&BirthdayEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn selection(&self) -> Option<BirthdayId> {
        self.selection
    }

    pub fn selected(&self) -> Option<&BirthdayEntry> {
        self.selection.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut registry = BirthdayRegistry::new();
        registry.add("Zoe", "2030-01-01T00:00").unwrap();
        registry.add("Ann", "2025-06-01T00:00").unwrap();
        registry.add("Max", "2027-03-15T08:30").unwrap();

        let names: Vec<&str> = registry.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Ann", "Max"]);
    }

    #[test]
    fn test_add_stores_moscow_wall_time() {
        let mut registry = BirthdayRegistry::new();
        let id = registry.add("Ann", "2025-06-01T00:00").unwrap();
        assert_eq!(
            registry.get(id).unwrap().date,
            Utc.with_ymd_and_hms(2025, 5, 31, 21, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_add_rejects_missing_fields() {
        let mut registry = BirthdayRegistry::new();
        assert_eq!(
            registry.add("", "2030-01-01T00:00"),
            Err(ValidationError::MissingName)
        );
        assert_eq!(registry.add("Ann", ""), Err(ValidationError::MissingDate));
        assert_eq!(
            registry.add("Ann", "someday"),
            Err(ValidationError::InvalidDate("someday".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_failed_add_does_not_consume_an_id() {
        let mut registry = BirthdayRegistry::new();
        registry.add("", "2030-01-01T00:00").unwrap_err();
        let id = registry.add("Ann", "2030-01-01T00:00").unwrap();
        assert_eq!(id, BirthdayId(1));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = BirthdayRegistry::new();
        let first = registry.add("Ann", "2030-01-01T00:00").unwrap();
        assert!(registry.remove(first));
        let second = registry.add("Ann", "2030-01-01T00:00").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut registry = BirthdayRegistry::new();
        let ann = registry.add("Ann", "2030-01-01T00:00").unwrap();
        assert!(registry.select(ann));
        assert!(registry.remove(ann));
        assert!(registry.is_empty());
        assert_eq!(registry.selection(), None);
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut registry = BirthdayRegistry::new();
        let ann = registry.add("Ann", "2030-01-01T00:00").unwrap();
        let bob = registry.add("Bob", "2031-01-01T00:00").unwrap();
        registry.select(ann);
        registry.remove(bob);
        assert_eq!(registry.selected().map(|e| e.name.as_str()), Some("Ann"));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut registry = BirthdayRegistry::new();
        registry.add("Ann", "2030-01-01T00:00").unwrap();
        assert!(!registry.remove(BirthdayId(99)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_select_unknown_keeps_current_selection() {
        let mut registry = BirthdayRegistry::new();
        let ann = registry.add("Ann", "2030-01-01T00:00").unwrap();
        registry.select(ann);
        assert!(!registry.select(BirthdayId(99)));
        assert_eq!(registry.selection(), Some(ann));

        registry.clear_selection();
        assert_eq!(registry.selected(), None);
    }
}
