//! A fixed-capacity indexed binary min-heap.
//!
//! Items are opaque `usize` handles in `[0, capacity)`; the heap owns the
//! handle→slot table, which is what makes [`contains`](MinHeap::contains)
//! O(1) and [`decrease`](MinHeap::decrease) O(log n). In the A* use the
//! handles are flat cell indices and the capacity is the grid's cell count.

use thiserror::Error;

/// Ordering key: f-cost ascending, h-cost as tie-break. The derived
/// lexicographic `Ord` is exactly that ranking — smaller is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority {
    pub f: i32,
    pub h: i32,
}

/// Errors reported by [`MinHeap`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    /// The heap already holds `capacity` items.
    #[error("heap is full (capacity {0})")]
    Full(usize),
    /// The handle is outside `[0, capacity)`.
    #[error("handle {handle} out of range (capacity {capacity})")]
    HandleOutOfRange { handle: usize, capacity: usize },
    /// The handle is already tracked by the heap.
    #[error("handle {0} is already in the heap")]
    Duplicate(usize),
    /// The handle is not currently tracked by the heap.
    #[error("handle {0} is not in the heap")]
    Missing(usize),
}

/// Slot-table sentinel for "not in the heap".
const ABSENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: usize,
    key: Priority,
}

/// Array-backed binary min-heap over `usize` handles, with fixed capacity
/// set at construction.
#[derive(Debug)]
pub struct MinHeap {
    entries: Vec<Entry>,
    /// handle → position in `entries`, or [`ABSENT`].
    slots: Vec<usize>,
}

impl MinHeap {
    /// Create an empty heap accepting handles in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            slots: vec![ABSENT; capacity],
        }
    }

    /// Maximum number of items the heap can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of items currently in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `handle` is currently in the heap. O(1).
    #[inline]
    pub fn contains(&self, handle: usize) -> bool {
        self.slots.get(handle).is_some_and(|&s| s != ABSENT)
    }

    /// Remove all items, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for e in self.entries.drain(..) {
            self.slots[e.handle] = ABSENT;
        }
    }

    /// The best (smallest-key) item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<(usize, Priority)> {
        self.entries.first().map(|e| (e.handle, e.key))
    }

    /// Insert `handle` with the given key and sift it into place.
    pub fn push(&mut self, handle: usize, key: Priority) -> Result<(), HeapError> {
        if handle >= self.slots.len() {
            return Err(HeapError::HandleOutOfRange {
                handle,
                capacity: self.slots.len(),
            });
        }
        if self.slots[handle] != ABSENT {
            return Err(HeapError::Duplicate(handle));
        }
        if self.entries.len() >= self.slots.len() {
            return Err(HeapError::Full(self.slots.len()));
        }
        let pos = self.entries.len();
        self.entries.push(Entry { handle, key });
        self.slots[handle] = pos;
        self.sift_up(pos);
        Ok(())
    }

    /// Remove and return the best (smallest-key) item, or `None` if empty.
    pub fn pop(&mut self) -> Option<(usize, Priority)> {
        let first = *self.entries.first()?;
        self.slots[first.handle] = ABSENT;
        let last = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.entries[0] = last;
            self.slots[last.handle] = 0;
            self.sift_down(0);
        }
        Some((first.handle, first.key))
    }

    /// Reposition `handle` after its key improved.
    ///
    /// Sifts upward only, so the new key must not be worse than the stored
    /// one — the cost-relaxation usage, where keys only ever decrease.
    pub fn decrease(&mut self, handle: usize, key: Priority) -> Result<(), HeapError> {
        let pos = match self.slots.get(handle) {
            Some(&s) if s != ABSENT => s,
            _ => return Err(HeapError::Missing(handle)),
        };
        debug_assert!(key <= self.entries[pos].key, "decrease must not worsen the key");
        self.entries[pos].key = key;
        self.sift_up(pos);
        Ok(())
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].key < self.entries[parent].key {
                self.swap_entries(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = pos * 2 + 1;
            let right = pos * 2 + 2;
            if left >= self.entries.len() {
                return;
            }
            // Right child wins only when strictly better.
            let mut child = left;
            if right < self.entries.len() && self.entries[right].key < self.entries[left].key {
                child = right;
            }
            if self.entries[child].key < self.entries[pos].key {
                self.swap_entries(pos, child);
                pos = child;
            } else {
                return;
            }
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots[self.entries[a].handle] = a;
        self.slots[self.entries[b].handle] = b;
    }
}
