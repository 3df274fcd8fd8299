//! # Recency Ring
//!
//! A circular doubly-linked list threaded through an arena of slots. The ring
//! owns every [`Entry`]; other components refer to entries by [`SlotId`].
//!
//! ```text
//!            head (MRU)                                 head.prev (LRU)
//!               │                                             │
//!               ▼                                             ▼
//!   ┌──────► [slot 2] ──next──► [slot 0] ──next──► [slot 3] ──next──┐
//!   │           ▲                                             │     │
//!   │           └──────────────────── prev ───────────────────┘     │
//!   └───────────────────────────────────────────────────────────────┘
//!
//!   slots: [Some(B), None, Some(A), Some(C)]     free: [1]
//! ```
//!
//! | Method          | Complexity | Description                              |
//! |-----------------|------------|------------------------------------------|
//! | `push_front`    | O(1)       | Link a detached entry in as the new head |
//! | `promote`       | O(1)       | Move a linked entry to the head          |
//! | `pop_back`      | O(1)       | Unlink and return the tail entry         |
//! | `iter`          | O(n)       | Walk MRU→LRU (diagnostics only)          |
//! | `check_links`   | O(n)       | Verify closure in both directions        |
//!
//! Slots vacated by `pop_back` go on a free stack and are reused by the next
//! `push_front`, so the arena never grows past the peak number of live entries.

use crate::cache::entry::{Entry, SlotId};
use crate::common::exception::{CacheError, Result};

#[derive(Debug)]
pub struct RecencyRing<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<SlotId>,
    /// Most-recently-used entry. `None` when the ring is empty.
    head: Option<SlotId>,
    len: usize,
}

impl<K, V> Default for RecencyRing<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecencyRing<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Creates a ring whose arena can hold `capacity` entries without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of arena slots allocated so far, live or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn head(&self) -> Option<SlotId> {
        self.head
    }

    pub fn tail(&self) -> Option<SlotId> {
        self.head.map(|head| self.node(head).prev)
    }

    pub fn get(&self, id: SlotId) -> Option<&Entry<K, V>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Entry<K, V>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn node(&self, id: SlotId) -> &Entry<K, V> {
        self.slots[id.index()]
            .as_ref()
            .expect("linked slot must hold an entry")
    }

    fn node_mut(&mut self, id: SlotId) -> &mut Entry<K, V> {
        self.slots[id.index()]
            .as_mut()
            .expect("linked slot must hold an entry")
    }

    fn alloc_slot(&mut self, entry: Entry<K, V>) -> SlotId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(entry);
                id
            }
            None => {
                self.slots.push(Some(entry));
                SlotId::new(self.slots.len() - 1)
            }
        }
    }

    /// Links `entry` in as the most-recently-used element and returns its slot.
    ///
    /// The previous tail stays the tail unless the ring was empty.
    pub fn push_front(&mut self, entry: Entry<K, V>) -> SlotId {
        let id = self.alloc_slot(entry);

        match self.head {
            None => {
                // Sole member: link to itself.
                let node = self.node_mut(id);
                node.prev = id;
                node.next = id;
            }
            Some(head) => {
                let tail = self.node(head).prev;

                let node = self.node_mut(id);
                node.next = head;
                node.prev = tail;

                self.node_mut(tail).next = id;
                self.node_mut(head).prev = id;
            }
        }

        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Moves a linked entry to the front. Unlink and splice happen in one
    /// pass so no caller ever sees the entry outside the ring.
    ///
    /// Returns `false` if `id` does not name a live slot.
    pub fn promote(&mut self, id: SlotId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let Some(head) = self.head else {
            return false;
        };
        if id == head {
            return true;
        }

        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;

        // Read the tail only after unlinking: if `id` was the tail, its
        // predecessor has taken its place.
        let tail = self.node(head).prev;

        let node = self.node_mut(id);
        node.next = head;
        node.prev = tail;

        self.node_mut(tail).next = id;
        self.node_mut(head).prev = id;

        self.head = Some(id);
        true
    }

    /// Unlinks the least-recently-used entry and hands ownership back to the
    /// caller. The vacated slot is queued for reuse.
    pub fn pop_back(&mut self) -> Option<Entry<K, V>> {
        let head = self.head?;
        let tail = self.node(head).prev;
        let before_tail = self.node(tail).prev;

        self.node_mut(before_tail).next = head;
        self.node_mut(head).prev = before_tail;

        if tail == head {
            self.head = None;
        }

        let mut entry = self.slots[tail.index()]
            .take()
            .expect("tail slot must hold an entry");
        entry.detach();
        self.free.push(tail);
        self.len -= 1;
        Some(entry)
    }

    /// Iterates from most- to least-recently-used.
    pub fn iter(&self) -> RingIter<'_, K, V> {
        RingIter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
            forward: true,
        }
    }

    /// Iterates from least- to most-recently-used.
    pub fn iter_rev(&self) -> RingIter<'_, K, V> {
        RingIter {
            ring: self,
            cursor: self.tail(),
            remaining: self.len,
            forward: false,
        }
    }

    /// Walks the ring in both directions and checks that it closes after
    /// exactly `len` steps, with every `next` mirrored by a `prev`.
    pub fn check_links(&self) -> Result<()> {
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        if occupied != self.len {
            return Err(CacheError::CorruptRing(format!(
                "{} occupied slots but len is {}",
                occupied, self.len
            )));
        }
        if occupied + self.free.len() != self.slots.len() {
            return Err(CacheError::CorruptRing(format!(
                "{} occupied + {} free slots != {} allocated",
                occupied,
                self.free.len(),
                self.slots.len()
            )));
        }

        let Some(head) = self.head else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(CacheError::CorruptRing(format!(
                    "no head but len is {}",
                    self.len
                )))
            };
        };

        self.walk(head, true)?;
        self.walk(head, false)
    }

    fn walk(&self, head: SlotId, forward: bool) -> Result<()> {
        let direction = if forward { "next" } else { "prev" };
        let mut cursor = head;

        for step in 0..self.len {
            let Some(node) = self.get(cursor) else {
                return Err(CacheError::CorruptRing(format!(
                    "{} walk reached vacant {} at step {}",
                    direction, cursor, step
                )));
            };
            if node.is_detached() {
                return Err(CacheError::CorruptRing(format!(
                    "{} is linked but detached",
                    cursor
                )));
            }

            let following = if forward { node.next } else { node.prev };
            let mirrored = self
                .get(following)
                .map(|other| if forward { other.prev } else { other.next });
            if mirrored != Some(cursor) {
                return Err(CacheError::CorruptRing(format!(
                    "{}.{} = {} is not mirrored back",
                    cursor, direction, following
                )));
            }
            if following == head && step + 1 != self.len {
                return Err(CacheError::CorruptRing(format!(
                    "{} walk closed after {} steps, expected {}",
                    direction,
                    step + 1,
                    self.len
                )));
            }
            cursor = following;
        }

        if cursor != head {
            return Err(CacheError::CorruptRing(format!(
                "{} walk did not return to head after {} steps",
                direction, self.len
            )));
        }
        Ok(())
    }
}

pub struct RingIter<'a, K, V> {
    ring: &'a RecencyRing<K, V>,
    cursor: Option<SlotId>,
    remaining: usize,
    forward: bool,
}

impl<'a, K, V> Iterator for RingIter<'a, K, V> {
    type Item = (SlotId, &'a Entry<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let node = self.ring.get(id)?;
        self.remaining -= 1;
        self.cursor = Some(if self.forward { node.next } else { node.prev });
        Some((id, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
