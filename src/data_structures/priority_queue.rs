use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::{Error, Result};

/// A binary min-heap ordered by an injected comparator, with an index from
/// element value to heap slot.
///
/// The index makes `contains` O(1) and lets `remove` take any element out in
/// O(log n), not just the root. Equal values may be pushed more than once:
/// each value maps to every slot currently holding it, `remove` takes out a
/// single occurrence and `contains` stays true until the last one is gone.
///
/// Ties under the comparator are broken by heap layout; there is no
/// stability guarantee between equal-priority elements.
pub struct IndexedPriorityQueue<E, C>
where
    E: Eq + Hash + Clone + Debug,
    C: Fn(&E, &E) -> Ordering,
{
    /// Heap-ordered storage: no element compares less than its parent
    heap: Vec<E>,

    /// value -> slots in `heap` holding that value
    positions: HashMap<E, Vec<usize>>,

    comparator: C,
}

impl<E, C> IndexedPriorityQueue<E, C>
where
    E: Eq + Hash + Clone + Debug,
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates a new empty queue ordered by `comparator` (smallest first)
    pub fn new(comparator: C) -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: HashMap::new(),
            comparator,
        }
    }

    /// Creates a new empty queue with room for `capacity` elements
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the queue, duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element and restores heap order
    pub fn push(&mut self, element: E) {
        let index = self.heap.len();
        self.positions.entry(element.clone()).or_default().push(index);
        self.heap.push(element);
        self.sift_up(index);
    }

    /// Returns true if at least one element equal to `element` is queued
    pub fn contains(&self, element: &E) -> bool {
        self.positions.contains_key(element)
    }

    /// Returns the smallest element without removing it
    pub fn top(&self) -> Result<&E> {
        self.heap.first().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the smallest element
    pub fn pop(&mut self) -> Result<E> {
        self.detach(0).ok_or(Error::EmptyQueue)
    }

    /// Removes one occurrence of `element`, wherever it sits in the heap
    pub fn remove(&mut self, element: &E) -> Result<E> {
        let index = self
            .positions
            .get(element)
            .and_then(|slots| slots.last().copied())
            .ok_or(Error::ElementNotFound)?;

        self.detach(index).ok_or(Error::ElementNotFound)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Iterates over the queued elements in heap (not sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.heap.iter()
    }

    /// Verifies heap order and that the index agrees with the heap
    pub fn is_consistent(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|i| !self.less(i, parent(i)));

        let indexed = self.heap.iter().enumerate().all(|(i, element)| {
            self.positions
                .get(element)
                .map_or(false, |slots| slots.contains(&i))
        });

        let slot_count: usize = self.positions.values().map(Vec::len).sum();

        ordered && indexed && slot_count == self.heap.len()
    }

    /// Takes the element at `index` out of the heap: swap it with the last
    /// slot, shrink, then repair order around `index`
    fn detach(&mut self, index: usize) -> Option<E> {
        let last = self.heap.len().checked_sub(1)?;
        if index > last {
            return None;
        }

        self.swap(index, last);
        let removed = self.heap.pop()?;
        Self::forget(&mut self.positions, &removed, last);

        if index < self.heap.len() {
            if index > 0 && self.less(index, parent(index)) {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }

        Some(removed)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if !self.less(index, p) {
                break;
            }
            self.swap(index, p);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.comparator)(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);

        // Equal values share one slot list that already names both slots
        if self.heap[a] == self.heap[b] {
            return;
        }
        Self::relocate(&mut self.positions, &self.heap[a], b, a);
        Self::relocate(&mut self.positions, &self.heap[b], a, b);
    }

    fn relocate(positions: &mut HashMap<E, Vec<usize>>, element: &E, from: usize, to: usize) {
        if let Some(slot) = positions
            .get_mut(element)
            .and_then(|slots| slots.iter_mut().find(|slot| **slot == from))
        {
            *slot = to;
        }
    }

    fn forget(positions: &mut HashMap<E, Vec<usize>>, element: &E, slot: usize) {
        let now_empty = match positions.get_mut(element) {
            Some(slots) => {
                if let Some(at) = slots.iter().position(|s| *s == slot) {
                    slots.swap_remove(at);
                }
                slots.is_empty()
            }
            None => false,
        };

        if now_empty {
            positions.remove(element);
        }
    }
}

impl<E, C> Debug for IndexedPriorityQueue<E, C>
where
    E: Eq + Hash + Clone + Debug,
    C: Fn(&E, &E) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap)
            .field("len", &self.heap.len())
            .finish()
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}
