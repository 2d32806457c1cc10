//! Bounded, ordered feed of rendered messages.
//!
//! Messages are rendered once, when appended, and kept alongside their visual
//! tree. Each entry gets a monotonically increasing sequence number that
//! adapters use as a stable key when diffing the displayed list.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::collections::VecDeque;

use crate::markup::Element;
use crate::message::ChatMessage;

/// A message together with its rendered tree.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedEntry {
    pub seq: u64,
    pub message: ChatMessage,
    pub node: Element,
}

/// FIFO feed capped at `capacity` entries.
#[derive(Clone, Debug)]
pub struct MessageFeed {
    entries: VecDeque<FeedEntry>,
    capacity: usize,
    next_seq: u64,
}

impl MessageFeed {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::new(), capacity: capacity.max(1), next_seq: 0 }
    }

    /// Append a rendered message, evicting from the front until the feed fits.
    /// Returns the evicted entries, oldest first.
    pub fn append(&mut self, message: ChatMessage, node: Element) -> Vec<FeedEntry> {
        self.next_seq += 1;
        self.entries.push_back(FeedEntry { seq: self.next_seq, message, node });
        self.evict_overflow()
    }

    /// Change the cap, evicting the oldest entries if the feed no longer fits.
    pub fn set_capacity(&mut self, capacity: usize) -> Vec<FeedEntry> {
        self.capacity = capacity.max(1);
        self.evict_overflow()
    }

    /// Remove everything. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    fn evict_overflow(&mut self) -> Vec<FeedEntry> {
        let excess = self.entries.len().saturating_sub(self.capacity);
        if excess == 0 {
            return Vec::new();
        }
        tracing::debug!(evicted = excess, capacity = self.capacity, "feed trimmed");
        self.entries.drain(..excess).collect()
    }
}
