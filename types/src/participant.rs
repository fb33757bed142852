//! Participant identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant, identified by an opaque name string.
///
/// Equality is by exact string value. Group identity is derived from
/// membership, so callers should not feed the same name twice in one roster.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Participant({})", self.0)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_exact_value() {
        assert_eq!(Participant::new("Ada"), Participant::new("Ada"));
        assert_ne!(Participant::new("Ada"), Participant::new("ada"));
    }

    #[test]
    fn display_shows_the_raw_name() {
        assert_eq!(Participant::new("Grace Hopper").to_string(), "Grace Hopper");
    }
}
