//! Order-independent group fingerprints.

use crate::participant::Participant;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte digest of a group's membership.
///
/// The fingerprint depends only on which participants are in the group, not
/// on the order they were added: member names are sorted lexicographically
/// before hashing. Each name is length-prefixed so that, say,
/// `["ab", "c"]` and `["a", "bc"]` cannot collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupFingerprint([u8; 32]);

impl GroupFingerprint {
    /// Fingerprint a group by its members, in any order.
    pub fn of_members(members: &[Participant]) -> Self {
        let mut sorted: Vec<&str> = members.iter().map(Participant::as_str).collect();
        sorted.sort_unstable();

        let mut hasher = Blake2b256::new();
        for name in sorted {
            hasher.update((name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
        }
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        Self(output)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for GroupFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupFingerprint({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for GroupFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::new(*n)).collect()
    }

    #[test]
    fn member_order_does_not_matter() {
        let a = GroupFingerprint::of_members(&group(&["Ada", "Bob", "Cleo"]));
        let b = GroupFingerprint::of_members(&group(&["Cleo", "Ada", "Bob"]));
        assert_eq!(a, b);
    }

    #[test]
    fn different_membership_differs() {
        let a = GroupFingerprint::of_members(&group(&["Ada", "Bob", "Cleo"]));
        let b = GroupFingerprint::of_members(&group(&["Ada", "Bob", "Dan"]));
        assert_ne!(a, b);
    }

    #[test]
    fn name_boundaries_are_unambiguous() {
        let a = GroupFingerprint::of_members(&group(&["ab", "c"]));
        let b = GroupFingerprint::of_members(&group(&["a", "bc"]));
        assert_ne!(a, b);
    }

    #[test]
    fn multiset_identity_counts_repeats() {
        let once = GroupFingerprint::of_members(&group(&["Ada", "Bob"]));
        let twice = GroupFingerprint::of_members(&group(&["Ada", "Ada", "Bob"]));
        assert_ne!(once, twice);
    }
}
