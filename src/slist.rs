use crate::arena::{Arena, NodeId};
use std::fmt::{self, Display};

/// A singly linked list over an owned node arena.
///
/// Uses the same node shape as [`DList`](crate::DList); back-links are simply
/// never set. Positions are 1-based.
pub struct SList<T> {
    arena: Arena<T>,
    first: Option<NodeId>,
    len: usize,
}

impl<T> SList<T> {
    #[inline]
    pub fn new() -> Self {
        SList {
            arena: Arena::new(),
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

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.first.map(|id| &self.arena[id].value)
    }

    #[inline]
    fn last_id(&self) -> Option<NodeId> {
        let mut current = self.first?;
        while let Some(next) = self.arena[current].next {
            current = next;
        }
        Some(current)
    }

    /// Inserts `value` at the front. Returns the new node's id.
    #[inline(always)]
    pub fn insert_first(&mut self, value: T) -> NodeId {
        let id = self.arena.alloc(value);
        self.arena[id].next = self.first;
        self.first = Some(id);
        self.len += 1;
        id
    }

    /// Inserts `value` at the back. Returns the new node's id.
    pub fn insert_last(&mut self, value: T) -> NodeId {
        let tail = self.last_id();
        let id = self.arena.alloc(value);
        match tail {
            Some(tail) => self.arena[tail].next = Some(id),
            None => self.first = Some(id),
        }
        self.len += 1;
        id
    }

    /// Removes the first element and returns it. `None` on an empty list.
    pub fn delete_first(&mut self) -> Option<T> {
        let id = self.first?;
        self.first = self.arena[id].next;
        self.len -= 1;
        self.arena.free(id)
    }

    /// Removes the last element and returns it. `None` on an empty list.
    pub fn delete_last(&mut self) -> Option<T> {
        let mut current = self.first?;
        let mut before: Option<NodeId> = None;
        while let Some(next) = self.arena[current].next {
            before = Some(current);
            current = next;
        }
        match before {
            Some(before) => self.arena[before].next = None,
            None => self.first = None,
        }
        self.len -= 1;
        self.arena.free(current)
    }

    /// Removes the element at 1-based `pos` and returns it.
    /// `None` (and no mutation) if `pos == 0` or `pos > len`.
    pub fn delete_at(&mut self, pos: usize) -> Option<T> {
        if pos == 0 || pos > self.len {
            return None;
        }
        if pos == 1 {
            return self.delete_first();
        }
        let mut before = self.first?;
        for _ in 2..pos {
            before = self.arena[before].next?;
        }
        let id = self.arena[before].next?;
        self.arena[before].next = self.arena[id].next;
        self.len -= 1;
        self.arena.free(id)
    }

    /// Reverses the list in place by redirecting `next` links.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.first;
        while let Some(id) = current {
            let next = self.arena[id].next;
            self.arena[id].next = prev;
            prev = current;
            current = next;
        }
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

impl<T: PartialEq> SList<T> {
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

    /// Removes the first element equal to `target` and returns it.
    pub fn delete_value(&mut self, target: &T) -> Option<T> {
        let pos = self.position(target)?;
        self.delete_at(pos)
    }
}

impl<T: Ord> SList<T> {
    /// Sorts the list ascending, in place, by bubbling values between
    /// adjacent nodes. Stable.
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

impl<T> Default for SList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for SList<T> {
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

impl<T> FromIterator<T> for SList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SList::new();
        let mut tail: Option<NodeId> = None;
        for value in iter {
            let id = list.arena.alloc(value);
            match tail {
                Some(t) => list.arena[t].next = Some(id),
                None => list.first = Some(id),
            }
            tail = Some(id);
            list.len += 1;
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward<T: Copy>(list: &SList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_new() {
        let list: SList<i32> = SList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_insert_first() {
        let mut list = SList::new();
        list.insert_first(1);
        list.insert_first(2);
        list.insert_first(3);
        assert_eq!(forward(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_insert_last() {
        let mut list = SList::new();
        list.insert_last(1);
        list.insert_last(2);
        list.insert_last(3);
        assert_eq!(forward(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_first() {
        let mut list: SList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.delete_first(), Some(1));
        assert_eq!(list.delete_first(), Some(2));
        assert_eq!(list.delete_first(), None);
    }

    #[test]
    fn test_delete_last() {
        let mut list: SList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.delete_last(), Some(3));
        assert_eq!(forward(&list), vec![1, 2]);
        assert_eq!(list.delete_last(), Some(2));
        assert_eq!(list.delete_last(), Some(1));
        assert_eq!(list.delete_last(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_at() {
        let mut list: SList<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(list.delete_at(2), Some(2));
        assert_eq!(forward(&list), vec![1, 3, 4]);
        assert_eq!(list.delete_at(3), Some(4));
        assert_eq!(forward(&list), vec![1, 3]);
        assert_eq!(list.delete_at(0), None);
        assert_eq!(list.delete_at(3), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_value() {
        let mut list: SList<i32> = [1, 2, 3, 2].into_iter().collect();
        assert_eq!(list.delete_value(&2), Some(2));
        assert_eq!(forward(&list), vec![1, 3, 2]);
        assert_eq!(list.delete_value(&9), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_position_find_contains() {
        let list: SList<i32> = [5, 6, 7].into_iter().collect();
        assert_eq!(list.position(&5), Some(1));
        assert_eq!(list.position(&7), Some(3));
        assert_eq!(list.position(&8), None);
        assert_eq!(list.find(&6), Some(&6));
        assert!(list.contains(&7));
        assert!(!list.contains(&8));
    }

    #[test]
    fn test_reverse() {
        let mut list: SList<i32> = [1, 2, 3].into_iter().collect();
        list.reverse();
        assert_eq!(forward(&list), vec![3, 2, 1]);
        list.reverse();
        assert_eq!(forward(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort() {
        let mut list: SList<i32> = [4, 1, 3, 2].into_iter().collect();
        list.sort();
        assert_eq!(forward(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        let list: SList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.to_string(), "[ (1) (2) (3) ]");
    }
}
