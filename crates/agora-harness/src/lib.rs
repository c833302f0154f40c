//! Deterministic simulation harness for Agora flow testing.
//!
//! Drives the production [`agora_app::Runtime`] with a scripted
//! [`SimDriver`] against the in-memory backend, so whole user flows run
//! without a terminal or a network.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the screen
//! invariants.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod invariants;
pub mod sim_driver;

pub use invariants::{
    EntryHoldsNothing, Invariant, InvariantRegistry, InvariantResult, ListsMatchSelection,
    LoadingSettled, ScreenSnapshot, SelectionLoaded, TopicRequiresForum, ViewMatchesSelection,
    Violation,
};
pub use sim_driver::{SimDriver, SimDriverError, SimInput};
