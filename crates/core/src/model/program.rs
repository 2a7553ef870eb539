use thiserror::Error;

use crate::model::ids::{ChapterId, ProgramId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgramError {
    #[error("program name cannot be empty")]
    EmptyName,

    #[error("chapter title cannot be empty")]
    EmptyChapterTitle,

    #[error("duplicate chapter id within program: {0}")]
    DuplicateChapterId(ChapterId),
}

//
// ─── CHAPTER ───────────────────────────────────────────────────────────────────
//

/// An atomic unit of content within a Program, completable once.
///
/// Chapters are immutable and exclusively owned by their parent Program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: ChapterId,
    title: String,
    description: String,
    duration: String,
}

impl Chapter {
    /// Creates a new Chapter.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::EmptyChapterTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: ChapterId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
    ) -> Result<Self, ProgramError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ProgramError::EmptyChapterTitle);
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into(),
            duration: duration.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Estimated duration, an opaque display string such as "15 min".
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }
}

//
// ─── PROGRAM ───────────────────────────────────────────────────────────────────
//

/// A named, fixed-length curriculum of Chapters.
///
/// Programs are defined once at startup and never created or destroyed at
/// runtime; all per-user state lives in the `ProgressRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    id: ProgramId,
    name: String,
    description: String,
    color: String,
    icon: String,
    duration: String,
    level: String,
    chapters: Vec<Chapter>,
}

impl Program {
    /// Creates a new Program.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::EmptyName` for an empty name, or
    /// `ProgramError::DuplicateChapterId` if two chapters share an id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProgramId,
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
        duration: impl Into<String>,
        level: impl Into<String>,
        chapters: Vec<Chapter>,
    ) -> Result<Self, ProgramError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProgramError::EmptyName);
        }

        for (i, chapter) in chapters.iter().enumerate() {
            if chapters[..i].iter().any(|c| c.id() == chapter.id()) {
                return Err(ProgramError::DuplicateChapterId(chapter.id().clone()));
            }
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            description: description.into(),
            color: color.into(),
            icon: icon.into(),
            duration: duration.into(),
            level: level.into(),
            chapters,
        })
    }

    #[must_use]
    pub fn id(&self) -> ProgramId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Color tag used by the presentation layer, e.g. "#A8C3A0".
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Overall duration label, e.g. "21 days".
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Difficulty label, e.g. "Beginner".
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    #[must_use]
    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
