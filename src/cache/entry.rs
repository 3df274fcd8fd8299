use std::fmt;

/// Stable index of a slot in the recency ring's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    /// Link value of an entry that is not part of any ring.
    pub const DETACHED: SlotId = SlotId(usize::MAX);

    pub(crate) fn new(index: usize) -> Self {
        SlotId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_detached(self) -> bool {
        self == Self::DETACHED
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_detached() {
            write!(f, "slot(detached)")
        } else {
            write!(f, "slot({})", self.0)
        }
    }
}

/// A single cache record plus its position links in the recency ring.
#[derive(Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    pub(crate) prev: SlotId,
    pub(crate) next: SlotId,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry that is not yet linked into a ring.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: SlotId::DETACHED,
            next: SlotId::DETACHED,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn prev(&self) -> SlotId {
        self.prev
    }

    pub fn next(&self) -> SlotId {
        self.next
    }

    pub fn is_detached(&self) -> bool {
        self.prev.is_detached() && self.next.is_detached()
    }

    pub(crate) fn detach(&mut self) {
        self.prev = SlotId::DETACHED;
        self.next = SlotId::DETACHED;
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
