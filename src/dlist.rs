use crate::arena::{Arena, NodeId};
use std::fmt::{self, Display};

/// A doubly linked list over an owned node arena.
///
/// The head descriptor tracks only the first node and the element count;
/// `next`/`prev` links live in the arena nodes. Positions are 1-based
/// throughout, matching the classic textbook interface.
pub struct DList<T> {
    arena: Arena<T>,
    first: Option<NodeId>,
    len: usize,
}

impl<T> DList<T> {
    #[inline]
    pub fn new() -> Self {
        DList {
            arena: Arena::new(),
            first: None,
            len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        DList {
            arena: Arena::with_capacity(capacity),
            first: None,
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

    /// Returns a reference to the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.first.map(|id| &self.arena[id].value)
    }

    /// Id of the node at 1-based `pos`, or `None` past the end.
    #[inline]
    fn node_at(&self, pos: usize) -> Option<NodeId> {
        if pos == 0 {
            return None;
        }
        let mut current = self.first?;
        for _ in 1..pos {
            current = self.arena[current].next?;
        }
        Some(current)
    }

    /// Id of the last node, walking forward from the head.
    #[inline]
    fn last_id(&self) -> Option<NodeId> {
        let mut current = self.first?;
        while let Some(next) = self.arena[current].next {
            current = next;
        }
        Some(current)
    }

    /// Links a detached node in front of the current first node.
    #[inline(always)]
    fn link_first(&mut self, id: NodeId) {
        self.arena[id].next = self.first;
        if let Some(old_first) = self.first {
            self.arena[old_first].prev = Some(id);
        }
        self.first = Some(id);
        self.len += 1;
    }

    /// Inserts `value` at the front. Returns the new node's id.
    #[inline(always)]
    pub fn insert_first(&mut self, value: T) -> NodeId {
        let id = self.arena.alloc(value);
        self.link_first(id);
        id
    }

    /// Inserts `value` at the back. Returns the new node's id.
    #[inline(always)]
    pub fn insert_last(&mut self, value: T) -> NodeId {
        let tail = self.last_id();
        let id = self.arena.alloc(value);
        match tail {
            Some(tail) => {
                self.arena[tail].next = Some(id);
                self.arena[id].prev = Some(tail);
                self.len += 1;
            }
            None => self.link_first(id),
        }
        id
    }

    /// Inserts `value` at 1-based `pos`, shifting later elements back.
    ///
    /// `pos == 1` is equivalent to [`insert_first`](Self::insert_first);
    /// `pos == 0` is treated as 1. A `pos` beyond `len + 1` appends at the
    /// tail, i.e. the effective position is `min(pos, len + 1)`.
    pub fn insert_at(&mut self, value: T, pos: usize) -> NodeId {
        let Some(first) = self.first else {
            return self.insert_first(value);
        };
        if pos <= 1 {
            return self.insert_first(value);
        }
        // Walk toward the node currently at `pos`, stopping at the tail.
        let mut current = first;
        let mut reached = 1;
        while reached < pos {
            match self.arena[current].next {
                Some(next) => {
                    current = next;
                    reached += 1;
                }
                None => break,
            }
        }
        let id = self.arena.alloc(value);
        if reached < pos {
            // Ran off the end: append after the tail.
            self.arena[current].next = Some(id);
            self.arena[id].prev = Some(current);
        } else {
            // Splice in before `current`, updating both neighbors.
            let prev = self.arena[current].prev;
            self.arena[id].prev = prev;
            self.arena[id].next = Some(current);
            self.arena[current].prev = Some(id);
            match prev {
                Some(prev) => self.arena[prev].next = Some(id),
                None => self.first = Some(id),
            }
        }
        self.len += 1;
        id
    }

    /// Removes the first element and returns it. `None` on an empty list.
    pub fn delete_first(&mut self) -> Option<T> {
        let id = self.first?;
        self.first = self.arena[id].next;
        if let Some(new_first) = self.first {
            self.arena[new_first].prev = None;
        }
        self.len -= 1;
        self.arena.free(id)
    }

    /// Removes the element at 1-based `pos` and returns it.
    /// `None` (and no mutation) if the list is empty, `pos == 0`, or
    /// `pos > len`.
    pub fn delete_at(&mut self, pos: usize) -> Option<T> {
        if pos == 0 || pos > self.len {
            return None;
        }
        let id = self.node_at(pos)?;
        let prev = self.arena[id].prev;
        let next = self.arena[id].next;
        match prev {
            Some(prev) => self.arena[prev].next = next,
            None => self.first = next,
        }
        if let Some(next) = next {
            self.arena[next].prev = prev;
        }
        self.len -= 1;
        self.arena.free(id)
    }

    /// Reverses the list in place. No-op for fewer than two elements.
    ///
    /// Each node's `next`/`prev` roles are swapped in a single forward walk;
    /// the last node visited becomes the new first.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut prev = None;
        let mut current = self.first;
        while let Some(id) = current {
            let node = &mut self.arena[id];
            let next = node.next;
            node.next = prev;
            node.prev = next;
            prev = current;
            current = next;
        }
        self.first = prev;
    }
}

impl<T: PartialEq> DList<T> {
    /// Returns the first element equal to `target`, in forward order.
    #[inline]
    pub fn find(&self, target: &T) -> Option<&T> {
        self.iter().find(|&value| value == target)
    }

    #[inline]
    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    /// 1-based position of the first element equal to `target`.
    #[inline]
    pub fn position(&self, target: &T) -> Option<usize> {
        self.iter().position(|value| value == target).map(|i| i + 1)
    }
}

impl<T: Ord> DList<T> {
    /// Sorts the list ascending, in place, by bubbling values between
    /// adjacent nodes. Stable: equal elements keep their relative order.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        for _ in 0..self.len - 1 {
            let mut current = self.first;
            let mut swapped = false;
            while let Some(a) = current {
                let Some(b) = self.arena[a].next else {
                    break;
                };
                if self.arena[a].value > self.arena[b].value {
                    self.arena.swap_values(a, b);
                    swapped = true;
                }
                current = Some(b);
            }
            if !swapped {
                break;
            }
        }
    }
}

impl<T> Default for DList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `[ (a) (b) (c) ]`, the classic parenthesized print shape.
impl<T: Display> Display for DList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.iter() {
            write!(f, "({value}) ")?;
        }
        write!(f, "]")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────────────

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

pub struct IntoIter<T>(DList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.delete_first()
    }
}

impl<T> IntoIterator for DList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T> DList<T> {
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.first,
        }
    }
}

impl<T> Extend<T> for DList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_id();
        for value in iter {
            let id = self.arena.alloc(value);
            match tail {
                Some(t) => {
                    self.arena[t].next = Some(id);
                    self.arena[id].prev = Some(t);
                }
                None => self.first = Some(id),
            }
            tail = Some(id);
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for DList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DList::new();
        list.extend(iter);
        list
    }
}
