use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::cache::entry::SlotId;

/// Maps each tracked key to the ring slot holding its entry.
///
/// The index never owns entries. It must be updated in the same step as
/// every ring mutation that adds or removes a slot.
#[derive(Debug)]
pub struct KeyIndex<K> {
    slots: FxHashMap<K, SlotId>,
}

impl<K> Default for KeyIndex<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn lookup<Q>(&self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots.get(key).copied()
    }

    /// Returns the slot previously mapped to `key`, if any.
    pub fn insert(&mut self, key: K, slot: SlotId) -> Option<SlotId> {
        self.slots.insert(key, slot)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots.remove(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, SlotId)> {
        self.slots.iter().map(|(key, slot)| (key, *slot))
    }
}
