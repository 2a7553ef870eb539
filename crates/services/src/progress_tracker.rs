use std::sync::Arc;

use heartspace_core::model::{
    Catalog, ChapterId, Program, ProgramId, ProgressRecord, completion_percent,
};
use storage::ProgressStore;

use crate::error::ProgressError;

/// Listener invoked after a completion mutation has been persisted, with the
/// affected program and its new percentage.
pub type ProgressListener = Box<dyn Fn(ProgramId, u8) + Send + Sync>;

/// Per-program view of completion state, for dashboard-style consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSummary {
    pub id: ProgramId,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub percent: u8,
    pub completed: usize,
    pub total: usize,
}

/// Owns enrollment/completion state for the fixed program catalog.
///
/// The tracker is the only writer of the `ProgressRecord`. Mutations are
/// synchronous and write-through: `complete` persists before it returns, so
/// any later query reflects the update. Completion percentages are always
/// derived from the record plus the catalog and never stored, which keeps
/// the two from drifting apart.
pub struct ProgressTracker {
    catalog: Arc<Catalog>,
    record: ProgressRecord,
    store: ProgressStore,
    listeners: Vec<ProgressListener>,
}

impl ProgressTracker {
    /// Loads the persisted record and binds it to the catalog.
    ///
    /// An absent stored value is the normal first-run state; a malformed one
    /// degrades to empty inside `ProgressStore::load`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the local store cannot be read.
    pub fn load(catalog: Arc<Catalog>, store: ProgressStore) -> Result<Self, ProgressError> {
        let record = store.load()?;
        Ok(Self {
            catalog,
            record,
            store,
            listeners: Vec::new(),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Registers a change listener, called after each effective completion.
    pub fn on_progress_changed(
        &mut self,
        listener: impl Fn(ProgramId, u8) + Send + Sync + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    /// Pure query: true only if the chapter was explicitly marked complete.
    #[must_use]
    pub fn is_complete(&self, program: ProgramId, chapter: &ChapterId) -> bool {
        self.record.is_complete(program, chapter)
    }

    /// Rounded completion percentage for the given program.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownProgram` for an id outside the catalog;
    /// the catalog is fixed at startup, so that indicates a caller defect.
    pub fn percent_complete(&self, program: ProgramId) -> Result<u8, ProgressError> {
        let program = self.program(program)?;
        Ok(completion_percent(
            self.record.completed_in(program),
            program.chapter_count(),
        ))
    }

    /// Marks a chapter complete and persists the record before returning.
    ///
    /// Idempotent: re-completing a chapter is a no-op (no write, no
    /// notification) and still returns the current percentage.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProgram`/`UnknownChapter` for ids outside the catalog,
    /// or `Storage` if the write-through fails (the in-memory mark is rolled
    /// back so memory and disk stay consistent).
    pub fn complete(
        &mut self,
        program_id: ProgramId,
        chapter: &ChapterId,
    ) -> Result<u8, ProgressError> {
        let program = self.program(program_id)?;
        if program.chapter(chapter).is_none() {
            return Err(ProgressError::UnknownChapter {
                program: program_id,
                chapter: chapter.as_str().to_owned(),
            });
        }

        let newly_marked = self.record.mark_complete(program_id, chapter.clone());
        if newly_marked {
            if let Err(e) = self.store.save(&self.record) {
                self.record = self.store.load()?;
                return Err(e.into());
            }
        }

        let percent = self.percent_complete(program_id)?;
        if newly_marked {
            for listener in &self.listeners {
                listener(program_id, percent);
            }
        }
        Ok(percent)
    }

    /// Writes the full record to the store, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the write fails.
    pub fn persist(&self) -> Result<(), ProgressError> {
        self.store.save(&self.record)?;
        Ok(())
    }

    /// Deletes the stored key and clears the in-memory record (sign-out).
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the delete fails; the in-memory
    /// record is left untouched in that case.
    pub fn reset(&mut self) -> Result<(), ProgressError> {
        self.store.clear()?;
        self.record.clear();
        Ok(())
    }

    /// Programs with any recorded progress.
    #[must_use]
    pub fn active_program_count(&self) -> usize {
        self.catalog
            .programs()
            .iter()
            .filter(|p| self.record.completed_in(p) > 0)
            .count()
    }

    /// Completed chapters across the whole catalog.
    #[must_use]
    pub fn completed_chapter_count(&self) -> usize {
        self.catalog
            .programs()
            .iter()
            .map(|p| self.record.completed_in(p))
            .sum()
    }

    /// One summary per catalog program, in catalog order.
    #[must_use]
    pub fn program_summaries(&self) -> Vec<ProgramSummary> {
        self.catalog
            .programs()
            .iter()
            .map(|p| {
                let completed = self.record.completed_in(p);
                ProgramSummary {
                    id: p.id(),
                    name: p.name().to_owned(),
                    color: p.color().to_owned(),
                    icon: p.icon().to_owned(),
                    percent: completion_percent(completed, p.chapter_count()),
                    completed,
                    total: p.chapter_count(),
                }
            })
            .collect()
    }

    fn program(&self, id: ProgramId) -> Result<&Program, ProgressError> {
        self.catalog
            .program(id)
            .ok_or(ProgressError::UnknownProgram(id))
    }
}
