use crate::arena::{Arena, NodeId};
use std::fmt::{self, Display};

/// A FIFO queue keeping both head and tail ids for O(1) enqueue and dequeue.
pub struct Queue<T> {
    arena: Arena<T>,
    first: Option<NodeId>,
    last: Option<NodeId>,
    len: usize,
}

impl<T> Queue<T> {
    #[inline]
    pub fn new() -> Self {
        Queue {
            arena: Arena::new(),
            first: None,
            last: None,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value at the front without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.first.map(|id| &self.arena[id].value)
    }

    /// Appends `value` at the back.
    #[inline(always)]
    pub fn enqueue(&mut self, value: T) {
        let id = self.arena.alloc(value);
        match self.last {
            Some(last) => self.arena[last].next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.len += 1;
    }

    /// Removes and returns the value at the front. `None` on an empty queue.
    pub fn dequeue(&mut self) -> Option<T> {
        let id = self.first?;
        self.first = self.arena[id].next;
        if self.first.is_none() {
            self.last = None;
        }
        self.len -= 1;
        self.arena.free(id)
    }

    /// Reverses the queue in place; the old front becomes the new back.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.first;
        while let Some(id) = current {
            let next = self.arena[id].next;
            self.arena[id].next = prev;
            prev = current;
            current = next;
        }
        self.last = self.first;
        self.first = prev;
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.first,
        }
    }
}

impl<T: PartialEq> Queue<T> {
    #[inline]
    pub fn contains(&self, target: &T) -> bool {
        self.iter().any(|value| value == target)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.iter() {
            write!(f, "({value}) ")?;
        }
        write!(f, "]")
    }
}

pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = &self.arena[id];
        self.current = node.next;
        Some(&node.value)
    }
}
