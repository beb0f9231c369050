use std::collections::BTreeSet;

/// The set of characters decomposition is allowed to terminate on: the
/// declared atomic parts plus the externally supplied known-character list.
///
/// Built once per run and used purely as a membership oracle afterwards.
/// The backing sets are sorted, so iteration over the members is
/// deterministic and dictionary generation is byte-stable.
#[derive(Debug, Clone, Default)]
pub struct ClosureSet {
    atomic: BTreeSet<char>,
    known: BTreeSet<char>,
}

impl ClosureSet {
    pub fn new(
        atomic: impl IntoIterator<Item = char>,
        known: impl IntoIterator<Item = char>,
    ) -> Self {
        ClosureSet {
            atomic: atomic.into_iter().collect(),
            known: known.into_iter().collect(),
        }
    }

    /// Atomic parts are policy-fixed leaves: never decomposed further, even
    /// when the structural source could.
    pub fn is_atomic(&self, c: char) -> bool {
        self.atomic.contains(&c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.atomic.contains(&c) || self.known.contains(&c)
    }

    pub fn atomic_parts(&self) -> &BTreeSet<char> {
        &self.atomic
    }

    /// All members in sorted order, atomic parts included.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.atomic.union(&self.known).copied()
    }

    pub fn len(&self) -> usize {
        self.atomic.union(&self.known).count()
    }

    pub fn is_empty(&self) -> bool {
        self.atomic.is_empty() && self.known.is_empty()
    }
}
