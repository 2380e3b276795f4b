//! Ordered set with set algebra.
//!
//! `OrderedSet<T>` is a unique-key tree whose keys are the members
//! themselves. Every algebra operation builds its result by inserting copies
//! of members into a freshly constructed tree, so results never share
//! storage with their operands.

use std::fmt;
use std::ops::Index;

use log::debug;

use crate::error::TreeResult;
use crate::iteration::Keys;
use crate::types::RedBlackTree;

/// Unique-membership set enumerated in ascending order.
///
/// # Examples
///
/// ```
/// use ordkit::OrderedSet;
///
/// let a = OrderedSet::from_members([1, 2, 3, 4, 5]);
/// let b = OrderedSet::from_members([5, 6, 7, 8, 9]);
///
/// let union = a.union([&b]);
/// assert_eq!(union, OrderedSet::from_members(1..=9));
/// assert_eq!(union[4], 5);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedSet<T> {
    tree: RedBlackTree<T, ()>,
}

/// Read-only view over a set.
///
/// Hands out membership, positional and iteration access but no mutator,
/// for derived collections that exist only to be read.
pub struct SetView<'a, T> {
    set: &'a OrderedSet<T>,
}

impl<T> Clone for SetView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SetView<'_, T> {}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            tree: RedBlackTree::new_unique(),
        }
    }

    /// Creates an empty set with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: RedBlackTree::with_capacity(true, capacity),
        }
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Alias of `count`.
    pub fn len(&self) -> usize {
        self.tree.count()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Keys<'_, T, ()> {
        self.tree.keys()
    }

    /// Member at in-order position `index`, `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.tree.get_index(index).map(|(member, _)| member)
    }

    /// Member at in-order position `index`, or `IndexOutOfRange`.
    pub fn try_index(&self, index: usize) -> TreeResult<&T> {
        self.tree.try_index(index).map(|(member, _)| member)
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|(member, _)| member)
    }

    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|(member, _)| member)
    }

    /// Removes every member.
    pub fn remove_all(&mut self) {
        self.tree.remove_all();
    }

    /// A read-only view of this set.
    pub fn view(&self) -> SetView<'_, T> {
        SetView { set: self }
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Creates a set holding `members`; duplicates collapse.
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.insert_members(members);
        set
    }

    /// Inserts a member; returns `false` if it was already present.
    pub fn insert(&mut self, member: T) -> bool {
        self.tree.insert(member, ())
    }

    /// Inserts each member independently; returns how many were new.
    pub fn insert_members<I>(&mut self, members: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        members
            .into_iter()
            .fold(0, |added, member| added + usize::from(self.insert(member)))
    }

    /// Removes a member; returns `false` if it was absent.
    pub fn remove(&mut self, member: &T) -> bool {
        self.tree.remove(member).is_some()
    }

    /// Removes each named member that is present; returns how many went.
    pub fn remove_members<'a, I>(&mut self, members: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        members
            .into_iter()
            .fold(0, |removed, member| removed + usize::from(self.remove(member)))
    }

    pub fn contains(&self, member: &T) -> bool {
        self.tree.contains_key(member)
    }

    /// In-order position of `member`.
    pub fn position(&self, member: &T) -> Option<usize> {
        self.tree.position(member)
    }

    /// Keeps only the members for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let doomed: Vec<T> = self.iter().filter(|&m| !keep(m)).cloned().collect();
        for member in &doomed {
            self.remove(member);
        }
    }

    // ============================================================================
    // SET ALGEBRA
    // ============================================================================

    /// A new set holding the members of `self` and of every set in `others`.
    pub fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let mut result = self.clone();
        result.union_in_place(others);
        result
    }

    /// Adds the members of every set in `others` to `self`.
    pub fn union_in_place<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        for other in others {
            self.insert_members(other.iter().cloned());
        }
        debug!("union: {} members", self.count());
    }

    /// A new set holding the members of `self` present in every set in
    /// `others`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordkit::OrderedSet;
    ///
    /// let a = OrderedSet::from_members([22, 23, 1, 2, 3, 4, 5]);
    /// let b = OrderedSet::from_members([22, 23, 5, 6, 7, 8, 9, 10]);
    /// let c = OrderedSet::from_members([22, 23, 10, 11, 12, 13, 14, 15]);
    ///
    /// assert_eq!(a.intersect([&b, &c]), OrderedSet::from_members([22, 23]));
    /// ```
    pub fn intersect<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        let result = self.copy_where(|member| others.iter().all(|o| o.contains(member)));
        debug!(
            "intersect: {} of {} members kept across {} sets",
            result.count(),
            self.count(),
            others.len()
        );
        result
    }

    /// Reduces `self` to the members present in every set in `others`.
    pub fn intersect_in_place<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        self.retain(|member| others.iter().all(|o| o.contains(member)));
    }

    /// A new set holding the members of `self` found in none of `others`.
    pub fn subtract<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        let result = self.copy_where(|member| !others.iter().any(|o| o.contains(member)));
        debug!(
            "subtract: {} of {} members kept across {} sets",
            result.count(),
            self.count(),
            others.len()
        );
        result
    }

    /// Removes from `self` every member found in any of `others`.
    pub fn subtract_in_place<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        self.retain(|member| !others.iter().any(|o| o.contains(member)));
    }

    /// True iff no member of `self` is also a member of `other`.
    pub fn is_disjoint_with(&self, other: &Self) -> bool {
        let (small, large) = if self.count() <= other.count() {
            (self, other)
        } else {
            (other, self)
        };
        !small.iter().any(|member| large.contains(member))
    }

    /// True iff every member of `self` is a member of `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.count() <= other.count() && self.iter().all(|member| other.contains(member))
    }

    /// Narrows `self` by intersecting with each filter in turn.
    ///
    /// An empty filter list leaves the set unchanged.
    pub fn refine<'a, I>(&mut self, filters: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        for filter in filters {
            if self.is_empty() {
                break;
            }
            self.intersect_in_place([filter]);
        }
    }

    fn copy_where<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut result = Self::new();
        for member in self.iter().filter(|&m| keep(m)) {
            result.insert(member.clone());
        }
        result
    }
}

// ============================================================================
// READ-ONLY VIEW
// ============================================================================

impl<'a, T> SetView<'a, T> {
    pub fn count(&self) -> usize {
        self.set.count()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> Keys<'a, T, ()> {
        self.set.iter()
    }

    pub fn get_index(&self, index: usize) -> Option<&'a T> {
        self.set.get_index(index)
    }

    pub fn first(&self) -> Option<&'a T> {
        self.set.first()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.set.last()
    }
}

impl<'a, T: Ord> SetView<'a, T> {
    pub fn contains(&self, member: &T) -> bool {
        self.set.contains(member)
    }

    /// Copies the viewed members into an independent, mutable set.
    pub fn to_set(&self) -> OrderedSet<T>
    where
        T: Clone,
    {
        self.set.clone()
    }
}

impl<T> Index<usize> for SetView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.set[index]
    }
}

impl<'a, T> IntoIterator for SetView<'a, T> {
    type Item = &'a T;
    type IntoIter = Keys<'a, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SetView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for OrderedSet<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn index(&self, index: usize) -> &T {
        self.tree.index(index).0
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_members(iter)
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_members(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Keys<'a, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedSet[")?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "]")
    }
}
