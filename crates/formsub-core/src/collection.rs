//! # Collection-Like Values
//!
//! [`CollectionLike`] is the element-count view [`not_empty`] checks.
//! Sequences, sets and key-to-value maps all implement it, so one assertion
//! covers every container kind.
//!
//! [`not_empty`]: crate::assertions::not_empty

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A container that can report how many elements it holds.
pub trait CollectionLike {
    /// Number of elements (entries, for maps).
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> CollectionLike for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> CollectionLike for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T> CollectionLike for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> CollectionLike for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> CollectionLike for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> CollectionLike for BinaryHeap<T> {
    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }
}

impl<T, S> CollectionLike for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<T> CollectionLike for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<K, V, S> CollectionLike for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> CollectionLike for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<C: CollectionLike + ?Sized> CollectionLike for &C {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<C: CollectionLike + ?Sized> CollectionLike for Box<C> {
    fn len(&self) -> usize {
        (**self).len()
    }
}
