//! Pending events ordered by timestamp.
//!
//! Events are bucketed per tick in a `BTreeMap<Tick, VecDeque<Event>>`.
//! `pop` takes from the front of the earliest bucket, so events sharing a
//! timestamp come out in the order they were pushed.  Successors of one event
//! keep the order their transition returned them in.

use std::collections::{BTreeMap, VecDeque};

use rd_core::Tick;

use crate::Event;

#[derive(Default, Debug)]
pub struct EventQueue {
    inner: BTreeMap<Tick, VecDeque<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at its own timestamp, behind any event already queued
    /// for the same tick.
    pub fn push(&mut self, event: Event) {
        self.inner.entry(event.timestamp()).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        let mut bucket = self.inner.first_entry()?;
        let event = bucket.get_mut().pop_front()?;
        if bucket.get().is_empty() {
            bucket.remove();
        }
        self.total -= 1;
        Some(event)
    }

    /// Timestamp of the event `pop` would return next.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks with at least one queued event.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.push(event);
        }
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<I: IntoIterator<Item = Event>>(events: I) -> Self {
        let mut queue = Self::new();
        queue.extend(events);
        queue
    }
}
