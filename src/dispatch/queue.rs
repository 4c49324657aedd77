//! Message queue: FIFO of erased messages.

use crate::event::Event;
use std::collections::VecDeque;

/// First-in, first-out queue of owned values.
///
/// The dispatcher stores [`Event`]s here, so every element carries the
/// kind of the message it holds. Popping an empty queue yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQueue<T = Event> {
    queue: VecDeque<T>,
}

impl<T> Default for MessageQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MessageQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a value at the tail.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.queue.push_back(value);
    }

    /// Remove and return the oldest value.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    /// Peek at the oldest value without removing it.
    pub fn front(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Check if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Drop every queued value.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Iterate over queued values, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ComponentEvt1, EventKind, StateEvt2, StateEvt3};

    #[test]
    fn test_queue_fifo_order() {
        let mut queue = MessageQueue::new();
        queue.push(Event::from(StateEvt3));
        queue.push(Event::from(ComponentEvt1));
        queue.push(Event::from(StateEvt2));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front().map(Event::kind), Some(EventKind::StateEvt3));

        let kinds: Vec<_> = std::iter::from_fn(|| queue.pop_front()).map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![EventKind::StateEvt3, EventKind::ComponentEvt1, EventKind::StateEvt2]
        );
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut queue: MessageQueue = MessageQueue::default();
        assert!(queue.is_empty());
        assert!(queue.pop_front().is_none());

        queue.push(Event::from(StateEvt2));
        assert!(queue.pop_front().is_some());
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn test_queue_owns_copies() {
        let mut queue = MessageQueue::with_capacity(2);
        let value = String::from("payload");
        queue.push(value.clone());
        drop(value);

        assert_eq!(queue.iter().count(), 1);
        assert_eq!(queue.pop_front().as_deref(), Some("payload"));
    }

    #[test]
    fn test_clear() {
        let mut queue = MessageQueue::new();
        queue.push(1_u8);
        queue.push(2_u8);
        queue.clear();
        assert!(queue.is_empty());
    }
}
