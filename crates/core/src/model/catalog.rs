use crate::model::ids::{ChapterId, ProgramId};
use crate::model::program::{Chapter, Program};

/// The immutable table of Programs available to every user.
///
/// The catalog is hard-coded and built once at startup; there is no loading
/// step and no runtime mutation. Per-user completion state lives in the
/// `ProgressRecord`, never here.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Vec<Program>,
}

impl Catalog {
    /// Builds a catalog from an explicit program list.
    #[must_use]
    pub fn new(programs: Vec<Program>) -> Self {
        Self { programs }
    }

    /// The shipped healing-program catalog: three programs of five chapters
    /// each.
    ///
    /// # Panics
    ///
    /// Panics only if the hard-coded content fails validation, which would be
    /// a defect in this function itself.
    #[must_use]
    pub fn builtin() -> Self {
        let build = |id: u32,
                     name: &str,
                     description: &str,
                     color: &str,
                     icon: &str,
                     duration: &str,
                     level: &str,
                     chapters: &[(&str, &str, &str, &str)]| {
            let chapters = chapters
                .iter()
                .map(|(cid, title, desc, dur)| {
                    Chapter::new(ChapterId::new(*cid), *title, *desc, *dur)
                        .expect("builtin chapter should be valid")
                })
                .collect();
            Program::new(
                ProgramId::new(id),
                name,
                description,
                color,
                icon,
                duration,
                level,
                chapters,
            )
            .expect("builtin program should be valid")
        };

        Self::new(vec![
            build(
                1,
                "Emotional Wellness",
                "Build emotional resilience and inner peace",
                "#A8C3A0",
                "💚",
                "21 days",
                "Beginner",
                &[
                    (
                        "ew-1",
                        "Understanding Your Emotions",
                        "Learn to identify and name your emotional experiences",
                        "15 min",
                    ),
                    (
                        "ew-2",
                        "Emotional Regulation Techniques",
                        "Practical tools for managing overwhelming feelings",
                        "20 min",
                    ),
                    (
                        "ew-3",
                        "Building Emotional Resilience",
                        "Strengthen your ability to bounce back",
                        "18 min",
                    ),
                    (
                        "ew-4",
                        "Healthy Emotional Expression",
                        "Communicate your feelings constructively",
                        "22 min",
                    ),
                    (
                        "ew-5",
                        "Cultivating Inner Peace",
                        "Create lasting emotional balance",
                        "25 min",
                    ),
                ],
            ),
            build(
                2,
                "Self-Love Mastery",
                "Develop deep self-compassion and confidence",
                "#D9A7A0",
                "✨",
                "30 days",
                "Intermediate",
                &[
                    (
                        "sl-1",
                        "The Foundation of Self-Love",
                        "Discover what self-love truly means",
                        "16 min",
                    ),
                    (
                        "sl-2",
                        "Releasing Self-Judgment",
                        "Let go of harsh inner criticism",
                        "19 min",
                    ),
                    (
                        "sl-3",
                        "Self-Care as a Practice",
                        "Create sustainable self-care rituals",
                        "21 min",
                    ),
                    (
                        "sl-4",
                        "Setting Loving Boundaries",
                        "Honor your needs in relationships",
                        "23 min",
                    ),
                    (
                        "sl-5",
                        "Embodying Self-Love Daily",
                        "Integrate self-love into your life",
                        "20 min",
                    ),
                ],
            ),
            build(
                3,
                "Authentic Expression",
                "Embrace your true self and voice your truth",
                "#CFE6F5",
                "⭐",
                "6 weeks",
                "All Levels",
                &[
                    (
                        "ae-1",
                        "Discovering Your Authentic Self",
                        "Uncover who you truly are",
                        "17 min",
                    ),
                    (
                        "ae-2",
                        "Breaking Free from Masks",
                        "Release personas that no longer serve you",
                        "20 min",
                    ),
                    (
                        "ae-3",
                        "Finding Your Voice",
                        "Speak your truth with confidence",
                        "22 min",
                    ),
                    (
                        "ae-4",
                        "Living Authentically",
                        "Align actions with your core values",
                        "24 min",
                    ),
                    (
                        "ae-5",
                        "Embracing Your Uniqueness",
                        "Celebrate what makes you special",
                        "19 min",
                    ),
                ],
            ),
        ])
    }

    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    #[must_use]
    pub fn program(&self, id: ProgramId) -> Option<&Program> {
        self.programs.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
