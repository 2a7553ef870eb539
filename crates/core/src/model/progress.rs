use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::{ChapterId, ProgramId};
use crate::model::program::Program;

/// The user's completion state across all Programs and Chapters.
///
/// The representation is sparse: a missing entry means "not completed", so an
/// empty record is the valid initial state for a new user. The JSON shape
/// matches what the persistence layer stores, e.g. `{"1":{"ew-1":true}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    completed: HashMap<ProgramId, HashMap<ChapterId, bool>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True only if the chapter was explicitly marked complete.
    #[must_use]
    pub fn is_complete(&self, program: ProgramId, chapter: &ChapterId) -> bool {
        self.completed
            .get(&program)
            .and_then(|chapters| chapters.get(chapter))
            .copied()
            .unwrap_or(false)
    }

    /// Marks a chapter complete. Idempotent: returns false if it was already
    /// marked.
    pub fn mark_complete(&mut self, program: ProgramId, chapter: ChapterId) -> bool {
        let chapters = self.completed.entry(program).or_default();
        !std::mem::replace(chapters.entry(chapter).or_insert(false), true)
    }

    /// Number of chapters of the given program marked complete.
    #[must_use]
    pub fn completed_in(&self, program: &Program) -> usize {
        program
            .chapters()
            .iter()
            .filter(|c| self.is_complete(program.id(), c.id()))
            .count()
    }

    /// Removes all completion state.
    pub fn clear(&mut self) {
        self.completed.clear();
    }

    /// True if no chapter anywhere is marked complete.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed
            .values()
            .all(|chapters| chapters.values().all(|done| !done))
    }
}

/// Rounded completion percentage for `completed` out of `total` chapters.
///
/// Defined as 0 for an empty program; never persisted, always recomputed.
#[must_use]
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (completed as f64 * 100.0 / total as f64).round() as u8;
    percent.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_read_as_incomplete() {
        let record = ProgressRecord::new();
        assert!(!record.is_complete(ProgramId::new(1), &ChapterId::new("ew-1")));
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut record = ProgressRecord::new();
        assert!(record.mark_complete(ProgramId::new(1), ChapterId::new("ew-1")));
        let snapshot = record.clone();
        assert!(!record.mark_complete(ProgramId::new(1), ChapterId::new("ew-1")));
        assert_eq!(record, snapshot);
    }

    #[test]
    fn clear_empties_the_record() {
        let mut record = ProgressRecord::new();
        record.mark_complete(ProgramId::new(2), ChapterId::new("sl-1"));
        record.clear();
        assert!(record.is_empty());
    }

    #[test]
    fn json_round_trip_preserves_shape() {
        let mut record = ProgressRecord::new();
        record.mark_complete(ProgramId::new(1), ChapterId::new("ew-1"));
        record.mark_complete(ProgramId::new(1), ChapterId::new("ew-3"));

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn parses_the_legacy_json_shape() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"1":{"ew-1":true,"ew-2":false}}"#).unwrap();
        assert!(record.is_complete(ProgramId::new(1), &ChapterId::new("ew-1")));
        assert!(!record.is_complete(ProgramId::new(1), &ChapterId::new("ew-2")));
    }

    #[test]
    fn percent_rounds_like_the_display_layer_expects() {
        assert_eq!(completion_percent(0, 3), 0);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(3, 3), 100);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(0, 0), 0);
    }
}
