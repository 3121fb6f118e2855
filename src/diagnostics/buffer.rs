// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer backing the session log.

/// Fixed-capacity ring. Once full, each push overwrites the slot holding
/// the oldest element, so memory stays flat no matter how long a session
/// runs.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    slots: Vec<T>,
    start: usize,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            start: 0,
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(item);
        } else {
            // start points at the oldest element, which is exactly the
            // slot to recycle.
            self.slots[self.start] = item;
            self.start = (self.start + 1) % self.capacity;
        }
    }

    /// Iterates elements oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (tail, head) = self.slots.split_at(self.start);
        head.iter().chain(tail.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.start = 0;
    }
}
