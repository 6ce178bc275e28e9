//! Materialized containers as validation subjects.

use std::collections::{
    BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque, binary_heap,
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque,
};
use std::hash::{BuildHasher, Hash};
use std::slice;

/// A possibly-null sequence of borrowed items.
///
/// Sets answer membership directly; maps are sequences of their keys.
pub trait Sequence {
    type Item;

    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// The items, or `None` for a null sequence.
    fn items(&self) -> Option<Self::Iter<'_>>;

    /// `true` when [`find`](Self::find) does not scan.
    fn is_indexed(&self) -> bool {
        false
    }

    /// Membership of a single item. A null sequence contains nothing.
    fn find(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        super::contains(self.items(), item)
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }
}

impl<T> Sequence for BinaryHeap<T> {
    type Item = T;
    type Iter<'a>
        = binary_heap::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }
}

impl<T: Eq + Hash, S: BuildHasher> Sequence for HashSet<T, S> {
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }

    fn is_indexed(&self) -> bool {
        true
    }

    fn find(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<T: Ord> Sequence for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.iter())
    }

    fn is_indexed(&self) -> bool {
        true
    }

    fn find(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Sequence for HashMap<K, V, S> {
    type Item = K;
    type Iter<'a>
        = hash_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.keys())
    }

    fn is_indexed(&self) -> bool {
        true
    }

    fn find(&self, item: &K) -> bool
    where
        K: PartialEq,
    {
        self.contains_key(item)
    }
}

impl<K: Ord, V> Sequence for BTreeMap<K, V> {
    type Item = K;
    type Iter<'a>
        = btree_map::Keys<'a, K, V>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        Some(self.keys())
    }

    fn is_indexed(&self) -> bool {
        true
    }

    fn find(&self, item: &K) -> bool
    where
        K: PartialEq,
    {
        self.contains_key(item)
    }
}

impl<Q: Sequence> Sequence for Option<Q> {
    type Item = Q::Item;
    type Iter<'a>
        = Q::Iter<'a>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        self.as_ref().and_then(|seq| seq.items())
    }

    fn is_indexed(&self) -> bool {
        self.as_ref().is_some_and(Q::is_indexed)
    }

    fn find(&self, item: &Q::Item) -> bool
    where
        Q::Item: PartialEq,
    {
        self.as_ref().is_some_and(|seq| seq.find(item))
    }
}

impl<Q: Sequence + ?Sized> Sequence for &Q {
    type Item = Q::Item;
    type Iter<'a>
        = Q::Iter<'a>
    where
        Self: 'a;

    fn items(&self) -> Option<Self::Iter<'_>> {
        (**self).items()
    }

    fn is_indexed(&self) -> bool {
        (**self).is_indexed()
    }

    fn find(&self, item: &Q::Item) -> bool
    where
        Q::Item: PartialEq,
    {
        (**self).find(item)
    }
}
