//! The group shuffling engine.

use crate::error::ShuffleError;
use huddle_types::{GroupFingerprint, Participant};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Partitions a roster into randomized groups of a fixed size, never
/// emitting the same group composition twice.
///
/// All state lives on the instance: the cursor over anchor positions, the
/// set of already-emitted fingerprints, and the random source. The instance
/// is not safe for concurrent use; independent grouping sessions need
/// independent instances.
#[derive(Debug)]
pub struct GroupShuffler<R: Rng = ThreadRng> {
    roster: Vec<Participant>,
    target_size: usize,
    shift: usize,
    known: HashSet<GroupFingerprint>,
    rng: R,
}

impl GroupShuffler {
    /// Create a shuffler backed by the thread-local random source.
    ///
    /// Fails if the roster is empty or `target_size` is below 2 — neither
    /// admits a meaningful grouping.
    pub fn new(roster: Vec<Participant>, target_size: usize) -> Result<Self, ShuffleError> {
        Self::with_rng(roster, target_size, rand::thread_rng())
    }
}

impl<R: Rng> GroupShuffler<R> {
    /// Create a shuffler with a caller-supplied random source.
    ///
    /// Seeded rngs make the whole sequence reproducible in tests.
    pub fn with_rng(
        roster: Vec<Participant>,
        target_size: usize,
        rng: R,
    ) -> Result<Self, ShuffleError> {
        if roster.is_empty() {
            return Err(ShuffleError::EmptyRoster);
        }
        if target_size < 2 {
            return Err(ShuffleError::GroupSizeTooSmall(target_size));
        }
        Ok(Self {
            roster,
            target_size,
            shift: 0,
            known: HashSet::new(),
            rng,
        })
    }

    /// Produce groups lazily, one per pull, as ", "-joined member names.
    ///
    /// The sequence is finite and forward-only. The cursor and the
    /// fingerprint history persist on the instance, so once the sequence is
    /// exhausted a second call yields nothing; construct a new instance for
    /// a fresh session.
    pub fn groups(&mut self) -> Groups<'_, R> {
        Groups {
            shuffler: self,
            pending: VecDeque::new(),
        }
    }

    /// Build the candidate groups for the current anchor and advance the
    /// cursor. Returns false once no further anchor can head a full group.
    fn advance(&mut self, pending: &mut VecDeque<Vec<Participant>>) -> bool {
        if self.shift + self.target_size > self.roster.len() {
            return false;
        }

        // The roster is walked in reverse input order; the participant at
        // reverse position `shift` anchors every candidate formed here.
        let reversed: Vec<&Participant> = self.roster.iter().rev().collect();
        let anchor = reversed[self.shift].clone();
        let mut rest: Vec<Participant> = reversed[self.shift + 1..]
            .iter()
            .map(|p| (*p).clone())
            .collect();
        rest.shuffle(&mut self.rng);

        for chunk in rest.chunks(self.target_size - 1) {
            let mut candidate = Vec::with_capacity(self.target_size);
            candidate.push(anchor.clone());
            candidate.extend_from_slice(chunk);
            pending.push_back(candidate);
        }

        trace!(
            shift = self.shift,
            anchor = %anchor,
            candidates = pending.len(),
            "formed candidates for anchor"
        );
        self.shift += 1;
        true
    }

    /// Accept a candidate outright, or repair it if it is short exactly one
    /// member. On success the candidate holds the final membership and its
    /// fingerprint has been recorded; on failure nothing changed.
    fn finalize(&mut self, candidate: &mut Vec<Participant>) -> bool {
        if candidate.len() == self.target_size {
            // A full-size duplicate fails outright; repair is only for
            // undersized candidates.
            return self.finalize_exact(candidate);
        }
        if candidate.len() + 1 != self.target_size {
            return false;
        }

        // One slot missing: try every roster member in random order. Repair
        // inspects the roster, it never consumes from it.
        let mut pool = self.roster.clone();
        pool.shuffle(&mut self.rng);
        for filler in pool {
            if candidate.contains(&filler) {
                continue;
            }
            candidate.push(filler);
            if self.finalize_exact(candidate) {
                debug!(group = ?candidate, "repaired undersized candidate");
                return true;
            }
            candidate.pop();
        }
        false
    }

    /// Accept a candidate only if it is exactly full-size and its
    /// composition has never been emitted before. Recording the fingerprint
    /// on success is the sole side effect of finalization.
    fn finalize_exact(&mut self, candidate: &[Participant]) -> bool {
        if candidate.len() != self.target_size {
            return false;
        }
        let fingerprint = GroupFingerprint::of_members(candidate);
        let fresh = self.known.insert(fingerprint);
        if !fresh {
            debug!(%fingerprint, "rejecting repeated group composition");
        }
        fresh
    }
}

/// Lazy iterator over accepted groups. See [`GroupShuffler::groups`].
pub struct Groups<'a, R: Rng> {
    shuffler: &'a mut GroupShuffler<R>,
    pending: VecDeque<Vec<Participant>>,
}

impl<R: Rng> Iterator for Groups<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            while let Some(mut candidate) = self.pending.pop_front() {
                if self.shuffler.finalize(&mut candidate) {
                    let joined = candidate
                        .iter()
                        .map(Participant::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Some(joined);
                }
                // Rejected candidates are dropped silently; the anchor
                // cursor has already moved on.
            }
            if !self.shuffler.advance(&mut self.pending) {
                return None;
            }
        }
    }
}
