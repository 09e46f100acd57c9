use crate::slist::{Iter, SList};
use std::fmt::{self, Display};

/// A LIFO stack: a thin manager over [`SList`] pushing and popping at the
/// front.
pub struct Stack<T> {
    list: SList<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub fn new() -> Self {
        Stack { list: SList::new() }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline(always)]
    pub fn push(&mut self, value: T) {
        self.list.insert_first(value);
    }

    /// Pops the most recently pushed value. `None` on an empty stack.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.list.delete_first()
    }

    /// Returns the value on top without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    /// Iterates top-down.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    #[inline]
    pub fn contains(&self, target: &T) -> bool {
        self.list.contains(target)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_leaves_stack_intact() {
        let mut stack = Stack::new();
        stack.push(7);
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_contains() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert!(stack.contains(&1));
        assert!(!stack.contains(&3));
    }

    #[test]
    fn test_display_top_down() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.to_string(), "[ (3) (2) (1) ]");
    }
}
