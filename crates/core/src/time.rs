use chrono::{DateTime, Utc};

/// Where "now" comes from.
///
/// The roster rules and the session directory never call `Utc::now()`
/// directly; they ask a `Clock`, so tests can pin time and assert on
/// upcoming/past boundaries exactly.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// System time.
    #[default]
    Default,
    /// Always the given instant.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// A clock frozen at `at`.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Timestamp used by deterministic tests (2025-03-14T01:20:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_741_915_200;

/// The deterministic test instant as a `DateTime<Utc>`.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// A `Clock` frozen at [`fixed_now`].
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
