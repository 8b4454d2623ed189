//! Bounded nearest-set used while building roads.
//!
//! A fixed-capacity selector that streams `(candidate, distance)` pairs and
//! keeps at most `cap` of them.  Once full, a new pair displaces the *first*
//! retained entry (in insertion order) that is farther away than it, not the
//! farthest one.  Arrival order therefore matters: the set can keep a farther
//! candidate over a closer one, and road layouts depend on exactly this rule.

/// Fixed-capacity `(candidate, distance)` selector.
#[derive(Clone, Debug)]
pub struct NearestSet<T> {
    cap:        usize,
    candidates: Vec<T>,
    distances:  Vec<f64>,
}

impl<T> NearestSet<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            candidates: Vec::with_capacity(cap),
            distances:  Vec::with_capacity(cap),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.candidates.len() == self.cap
    }

    /// Offer a candidate at `distance` from the pivot.
    pub fn add(&mut self, candidate: T, distance: f64) {
        if self.is_full() {
            if let Some(i) = self.distances.iter().position(|&d| d > distance) {
                self.candidates.remove(i);
                self.distances.remove(i);
            }
        }

        if self.candidates.len() < self.cap {
            self.candidates.push(candidate);
            self.distances.push(distance);
        }
    }

    /// Retained pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.candidates.iter().zip(self.distances.iter().copied())
    }

    /// Consume the set, yielding retained pairs in their current order.
    pub fn into_pairs(self) -> impl Iterator<Item = (T, f64)> {
        self.candidates.into_iter().zip(self.distances)
    }
}
