//! LIFO register backing the undo and redo histories.

use std::collections::VecDeque;

/// Last-in, first-out container.
///
/// Popping an empty stack returns `None`; callers treat that as "nothing to
/// do". The oldest entry can be evicted from the bottom when a history is
/// bounded.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: VecDeque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Returns the most recently pushed item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Removes and returns the least recently pushed item.
    pub fn evict_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
