// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Shore Domains
//!
//! The constraint-satisfaction view of the separator problem: every
//! vertex carries a candidate set over the three placements (separator,
//! right shore, left shore) that only ever shrinks along a branch of the
//! search tree.
//!
//! ## Highlights
//!
//! - [`ShoreSet`] packs the candidate set into three bits; removal
//!   reports whether the set shrank, collapsed to a singleton, or was
//!   emptied, which is exactly the signal propagation dispatches on.
//! - [`DomainStore`] shares untouched entries with the parent node via
//!   `Arc` and clones an entry only on its first shrink along a branch
//!   (`Arc::make_mut`), so branching is cheap even on dense graphs.

use std::sync::Arc;
use strait_graph::VertexIndex;

/// A placement of a vertex in the tri-partition.
///
/// The discriminant order doubles as the branching value order: the
/// separator is tried first, then the right shore, then the left.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shore {
    Separator = 0,
    Right = 1,
    Left = 2,
}

impl Shore {
    /// All placements in branching preference order.
    pub const VALUE_ORDER: [Shore; 3] = [Shore::Separator, Shore::Right, Shore::Left];

    /// The shore a neighbor of a placed vertex is excluded from, if any.
    /// Separator placements impose nothing on neighbors.
    #[inline]
    pub const fn opposite(self) -> Option<Shore> {
        match self {
            Shore::Left => Some(Shore::Right),
            Shore::Right => Some(Shore::Left),
            Shore::Separator => None,
        }
    }

    #[inline]
    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Shore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shore::Separator => write!(f, "Separator"),
            Shore::Right => write!(f, "Right"),
            Shore::Left => write!(f, "Left"),
        }
    }
}

/// The outcome of removing a value from a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRemoval {
    /// The value was not present; nothing changed.
    Unchanged,
    /// The value was removed; at least two candidates remain.
    Shrunk,
    /// The value was removed and exactly one candidate remains.
    Singleton(Shore),
    /// The value was removed and no candidate remains.
    Emptied,
}

/// A set of candidate placements for one vertex, packed into three bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShoreSet(u8);

impl ShoreSet {
    /// The full set `{Separator, Right, Left}`.
    #[inline]
    pub const fn full() -> Self {
        ShoreSet(0b111)
    }

    /// The empty set.
    #[inline]
    pub const fn empty() -> Self {
        ShoreSet(0)
    }

    /// The set containing only `shore`.
    #[inline]
    pub const fn singleton(shore: Shore) -> Self {
        ShoreSet(shore.mask())
    }

    /// Returns whether `shore` is a candidate.
    #[inline]
    pub const fn contains(self, shore: Shore) -> bool {
        self.0 & shore.mask() != 0
    }

    /// Returns the number of candidates.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether no candidate remains.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// If exactly one candidate remains, returns it.
    #[inline]
    pub const fn only(self) -> Option<Shore> {
        match self.0 {
            0b001 => Some(Shore::Separator),
            0b010 => Some(Shore::Right),
            0b100 => Some(Shore::Left),
            _ => None,
        }
    }

    /// Removes `shore` from the set and reports the structural outcome.
    #[inline]
    pub fn remove(&mut self, shore: Shore) -> DomainRemoval {
        if !self.contains(shore) {
            return DomainRemoval::Unchanged;
        }
        self.0 &= !shore.mask();
        match self.only() {
            Some(remaining) => DomainRemoval::Singleton(remaining),
            None if self.is_empty() => DomainRemoval::Emptied,
            None => DomainRemoval::Shrunk,
        }
    }

    /// Iterates over the candidates in branching preference order.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Shore> {
        Shore::VALUE_ORDER
            .into_iter()
            .filter(move |shore| self.contains(*shore))
    }
}

impl std::fmt::Display for ShoreSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for shore in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", shore)?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// One vertex's domain entry as stored (and shared) between nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Domain {
    values: ShoreSet,
}

/// The per-vertex domains of one search node.
///
/// Cloning a store only bumps the `Arc` of every entry; the first
/// mutation of an entry along a branch detaches it from the parent
/// (`Arc::make_mut`). Domains only ever shrink along a branch, so an
/// entry is either pointer-identical to the parent's or strictly
/// narrower.
#[derive(Debug, Clone)]
pub struct DomainStore {
    entries: Vec<Arc<Domain>>,
}

impl DomainStore {
    /// Creates the root store: every vertex may still go anywhere.
    pub fn root(num_vertices: usize) -> Self {
        let full = Arc::new(Domain {
            values: ShoreSet::full(),
        });
        DomainStore {
            entries: vec![full; num_vertices],
        }
    }

    /// Returns the number of vertices covered by this store.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store covers no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the candidate set of `vertex`.
    #[inline]
    pub fn values(&self, vertex: VertexIndex) -> ShoreSet {
        debug_assert!(vertex.get() < self.entries.len(), "vertex out of bounds");
        self.entries[vertex.get()].values
    }

    /// Removes `shore` from the domain of `vertex`, detaching the entry
    /// from any shared parent on first mutation.
    #[inline]
    pub fn remove(&mut self, vertex: VertexIndex, shore: Shore) -> DomainRemoval {
        debug_assert!(vertex.get() < self.entries.len(), "vertex out of bounds");
        // Avoid detaching the entry when nothing would change.
        if !self.entries[vertex.get()].values.contains(shore) {
            return DomainRemoval::Unchanged;
        }
        Arc::make_mut(&mut self.entries[vertex.get()]).values.remove(shore)
    }

    /// Collapses the domain of `vertex` to exactly `shore`.
    ///
    /// # Panics (debug)
    ///
    /// Debug-asserts that `shore` is still a candidate.
    #[inline]
    pub fn fix(&mut self, vertex: VertexIndex, shore: Shore) {
        debug_assert!(vertex.get() < self.entries.len(), "vertex out of bounds");
        let current = self.entries[vertex.get()].values;
        debug_assert!(current.contains(shore), "fixing a removed value");
        if current != ShoreSet::singleton(shore) {
            Arc::make_mut(&mut self.entries[vertex.get()]).values = ShoreSet::singleton(shore);
        }
    }

    /// Returns whether this store still shares the entry of `vertex`
    /// with `other` (no shrink happened on either side).
    #[cfg(test)]
    pub(crate) fn shares_entry(&self, other: &DomainStore, vertex: VertexIndex) -> bool {
        Arc::ptr_eq(&self.entries[vertex.get()], &other.entries[vertex.get()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    #[test]
    fn test_shore_opposite() {
        assert_eq!(Shore::Left.opposite(), Some(Shore::Right));
        assert_eq!(Shore::Right.opposite(), Some(Shore::Left));
        assert_eq!(Shore::Separator.opposite(), None);
    }

    #[test]
    fn test_shore_set_basics() {
        let full = ShoreSet::full();
        assert_eq!(full.len(), 3);
        assert!(full.contains(Shore::Left));
        assert!(full.only().is_none());

        let single = ShoreSet::singleton(Shore::Right);
        assert_eq!(single.len(), 1);
        assert_eq!(single.only(), Some(Shore::Right));
        assert!(!single.contains(Shore::Left));

        assert!(ShoreSet::empty().is_empty());
    }

    #[test]
    fn test_remove_reports_structure() {
        let mut set = ShoreSet::full();
        assert_eq!(set.remove(Shore::Left), DomainRemoval::Shrunk);
        assert_eq!(set.remove(Shore::Left), DomainRemoval::Unchanged);
        assert_eq!(
            set.remove(Shore::Right),
            DomainRemoval::Singleton(Shore::Separator)
        );
        assert_eq!(set.remove(Shore::Separator), DomainRemoval::Emptied);
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_follows_value_order() {
        let mut set = ShoreSet::full();
        set.remove(Shore::Right);
        let values: Vec<_> = set.iter().collect();
        assert_eq!(values, vec![Shore::Separator, Shore::Left]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ShoreSet::full()), "{Separator, Right, Left}");
        assert_eq!(format!("{}", ShoreSet::empty()), "{}");
        assert_eq!(
            format!("{}", ShoreSet::singleton(Shore::Left)),
            "{Left}"
        );
    }

    #[test]
    fn test_store_root_is_full_everywhere() {
        let store = DomainStore::root(4);
        assert_eq!(store.len(), 4);
        for i in 0..4 {
            assert_eq!(store.values(vi(i)), ShoreSet::full());
        }
    }

    #[test]
    fn test_clone_shares_until_first_shrink() {
        let parent = DomainStore::root(3);
        let mut child = parent.clone();
        assert!(child.shares_entry(&parent, vi(0)));
        assert!(child.shares_entry(&parent, vi(1)));

        assert_eq!(child.remove(vi(1), Shore::Right), DomainRemoval::Shrunk);
        // The touched entry detaches; the rest stay shared.
        assert!(!child.shares_entry(&parent, vi(1)));
        assert!(child.shares_entry(&parent, vi(0)));
        assert!(child.shares_entry(&parent, vi(2)));

        // The parent never observes the child's shrink.
        assert_eq!(parent.values(vi(1)), ShoreSet::full());
        assert_eq!(child.values(vi(1)).len(), 2);
    }

    #[test]
    fn test_remove_absent_value_keeps_sharing() {
        let parent = DomainStore::root(2);
        let mut child = parent.clone();
        child.remove(vi(0), Shore::Left);
        assert_eq!(child.remove(vi(0), Shore::Left), DomainRemoval::Unchanged);
        // Vertex 1 was never touched and must still be shared.
        assert!(child.shares_entry(&parent, vi(1)));
    }

    #[test]
    fn test_fix_collapses_to_singleton() {
        let mut store = DomainStore::root(2);
        store.fix(vi(0), Shore::Separator);
        assert_eq!(store.values(vi(0)), ShoreSet::singleton(Shore::Separator));
        // Fixing an already-singleton domain is a no-op.
        store.fix(vi(0), Shore::Separator);
        assert_eq!(store.values(vi(0)).only(), Some(Shore::Separator));
    }
}
