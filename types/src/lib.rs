//! Fundamental types for huddle.
//!
//! This crate defines the types shared across the workspace: participant
//! names and the order-independent fingerprints used to detect repeated
//! group compositions.

pub mod fingerprint;
pub mod participant;

pub use fingerprint::GroupFingerprint;
pub use participant::Participant;
