//! Screen invariants checked while a simulation runs.
//!
//! Each [`Invariant`] looks at a [`ScreenSnapshot`] taken from the App: once
//! before every poll (the App is waiting for input, so nothing may still be
//! loading) and once at every render. The [`SimDriver`](crate::SimDriver)
//! fails the test at the first violation, naming the phase it was found in.
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! registry.assert_all(&ScreenSnapshot::from_app(&app, true), "before poll 3");
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    EntryHoldsNothing, ListsMatchSelection, LoadingSettled, SelectionLoaded, TopicRequiresForum,
    ViewMatchesSelection,
};
pub use snapshot::ScreenSnapshot;

/// Outcome of one invariant check.
pub type InvariantResult = Result<(), Violation>;

/// A broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Invariant that failed.
    pub invariant: &'static str,
    /// What the snapshot showed.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property of the screen state.
pub trait Invariant: Send + Sync {
    /// Short name used in failure messages.
    fn name(&self) -> &'static str;

    /// Inspect the snapshot.
    fn check(&self, state: &ScreenSnapshot) -> InvariantResult;

    /// Build a [`Violation`] tagged with this invariant's name.
    fn violation(&self, message: String) -> Violation {
        Violation { invariant: self.name(), message }
    }
}

/// Set of invariants run together.
#[derive(Default)]
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl InvariantRegistry {
    /// Registry with no invariants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every screen invariant of this crate:
    ///
    /// - [`TopicRequiresForum`]
    /// - [`SelectionLoaded`]
    /// - [`ListsMatchSelection`]
    /// - [`ViewMatchesSelection`]
    /// - [`EntryHoldsNothing`]
    /// - [`LoadingSettled`]
    pub fn standard() -> Self {
        Self::new()
            .with(TopicRequiresForum)
            .with(SelectionLoaded)
            .with(ListsMatchSelection)
            .with(ViewMatchesSelection)
            .with(EntryHoldsNothing)
            .with(LoadingSettled)
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with<I: Invariant + 'static>(mut self, invariant: I) -> Self {
        self.add(invariant);
        self
    }

    /// Register one more invariant.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Every violation found in `state`, in registration order.
    pub fn check_all(&self, state: &ScreenSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Fail the running test if any invariant is broken.
    #[allow(clippy::panic, reason = "harness fails the test with context")]
    pub fn assert_all(&self, state: &ScreenSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let lines: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("invariants broken {context}:\n  {}", lines.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
