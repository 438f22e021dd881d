//! Containers which hold discovered but unexpanded search items.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;

use crate::errors::{Result, SearchError};

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
///
/// The pop order is the only thing which distinguishes one
/// frontier from another.
pub trait SearchQueue {
    type Item;

    /// Remove the next item. Fails with [SearchError::EmptyContainer]
    /// when nothing is left, so callers should check [SearchQueue::is_empty].
    fn pop(&mut self) -> Result<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    container: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack {
            container: Vec::new(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The item which the next pop would return.
    pub fn peek(&self) -> Option<&T> {
        self.container.last()
    }
}

impl<T> SearchQueue for Stack<T> {
    type Item = T;

    fn pop(&mut self) -> Result<Self::Item> {
        self.container.pop().ok_or(SearchError::EmptyContainer)
    }

    fn push(&mut self, item: Self::Item) {
        self.container.push(item);
    }

    fn len(&self) -> usize {
        self.container.len()
    }
}

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    container: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue {
            container: VecDeque::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self) -> Option<&T> {
        self.container.front()
    }
}

impl<T> SearchQueue for Queue<T> {
    type Item = T;

    fn pop(&mut self) -> Result<Self::Item> {
        self.container
            .pop_front()
            .ok_or(SearchError::EmptyContainer)
    }

    fn push(&mut self, item: Self::Item) {
        self.container.push_back(item);
    }

    fn len(&self) -> usize {
        self.container.len()
    }
}

/// Binary heap which pops the smallest item first.
///
/// Items which compare equal come out in an unspecified order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T>
where
    T: Ord,
{
    container: BinaryHeap<Reverse<T>>,
}

impl<T> Default for PriorityQueue<T>
where
    T: Ord,
{
    fn default() -> Self {
        PriorityQueue {
            container: BinaryHeap::new(),
        }
    }
}

impl<T> PriorityQueue<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peek(&self) -> Option<&T> {
        self.container.peek().map(|Reverse(item)| item)
    }
}

impl<T> SearchQueue for PriorityQueue<T>
where
    T: Ord,
{
    type Item = T;

    fn pop(&mut self) -> Result<Self::Item> {
        self.container
            .pop()
            .map(|Reverse(item)| item)
            .ok_or(SearchError::EmptyContainer)
    }

    fn push(&mut self, item: Self::Item) {
        self.container.push(Reverse(item));
    }

    fn len(&self) -> usize {
        self.container.len()
    }
}
