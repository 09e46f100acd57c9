use std::mem;
use std::ops::{Index, IndexMut};

/// Stable handle to a live node slot in an [`Arena`].
///
/// Ids stay valid until the node is freed; slots are reused afterwards, so a
/// stale id must never be held across a free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node in a linked structure: one value plus optional neighbor links.
///
/// This is the single node shape shared by every structure in the crate;
/// singly-linked structures simply leave `prev` as `None`.
pub struct Node<T> {
    pub value: T,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline(always)]
    fn new(value: T) -> Self {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}

enum Slot<T> {
    Occupied(Node<T>),
    /// Freed slot threading to the next free slot index.
    Free(Option<usize>),
}

/// Slab of nodes addressed by stable indices, with free-list reuse.
/// Freed slots are linked through their `Free` payload, so alloc/free is O(1)
/// and a slot is recycled before the backing vector grows.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    live: usize,
}

impl<T> Arena<T> {
    #[inline]
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: None,
            live: 0,
        }
    }

    /// Number of live (occupied) nodes.
    #[inline(always)]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Total slots ever allocated, live or free.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Allocates a detached node holding `value` and returns its id.
    #[inline(always)]
    pub fn alloc(&mut self, value: T) -> NodeId {
        self.live += 1;
        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(Node::new(value)));
                let Slot::Free(next_free) = slot else {
                    unreachable!()
                };
                self.free = next_free;
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(Node::new(value)));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the node at `id` and returns its value.
    /// Returns `None` if the slot is already free (stale id).
    #[inline(always)]
    pub fn free(&mut self, id: NodeId) -> Option<T> {
        match self.slots.get_mut(id.0) {
            Some(slot @ Slot::Occupied(_)) => {
                let Slot::Occupied(node) = mem::replace(slot, Slot::Free(self.free)) else {
                    unreachable!()
                };
                self.free = Some(id.0);
                self.live -= 1;
                Some(node.value)
            }
            _ => None,
        }
    }

    /// Swaps the values held by two distinct live nodes, leaving links alone.
    #[inline(always)]
    pub fn swap_values(&mut self, a: NodeId, b: NodeId) {
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        assert_ne!(lo, hi, "cannot swap a node with itself");
        let (left, right) = self.slots.split_at_mut(hi);
        match (&mut left[lo], &mut right[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.value, &mut y.value),
            _ => panic!("swap_values on a freed slot"),
        }
    }

    #[inline(always)]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    /// Panics if `id` points at a freed slot; list managers only index with
    /// ids of nodes currently linked into them.
    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => panic!("node id {:?} points at a freed slot", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Free(_) => panic!("node id {:?} points at a freed slot", id),
        }
    }
}
