//! Randomized group partitioning with duplicate tracking.
//!
//! A [`GroupShuffler`] splits a roster of participants into groups of a
//! fixed target size. Across the lifetime of one instance, no exact group
//! composition (set of members) is ever produced twice: every accepted
//! group's fingerprint is recorded and later candidates that collide with
//! it are rejected.
//!
//! Generation is incremental. A sliding cursor walks the roster in reverse
//! input order; the participant at the cursor anchors every candidate group
//! formed at that position, which guarantees the sequence terminates — the
//! cursor strictly advances regardless of how many candidates are rejected.
//! Candidates left short of the target size (the trailing chunk of a
//! shuffle) are repaired by borrowing one more participant from the roster
//! rather than emitted undersized.

pub mod error;
pub mod shuffler;

pub use error::ShuffleError;
pub use shuffler::{GroupShuffler, Groups};
