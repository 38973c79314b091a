use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;

use crate::model::{AttachedItem, DecorTree};

/// Per-node summary kept between repaints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecorationEntry {
    pub item_count: usize,
    /// Type names parallel to the node's items; `None` marks a missing item.
    pub item_types: SmallVec<[Option<String>; 8]>,
    pub tag: String,
    pub layer: String,
    /// Active flag as of entry creation. Updates leave it untouched; drawing reads the live
    /// value from the tree instead.
    pub was_active: bool,
}

impl DecorationEntry {
    fn capture<T: DecorTree + ?Sized>(tree: &T, id: T::Id) -> Self {
        let items = tree.items(id);
        Self {
            item_count: items.len(),
            item_types: items.iter().map(item_type).collect(),
            tag: tree.tag(id).to_owned(),
            layer: tree.layer(id).to_owned(),
            was_active: tree.is_active(id),
        }
    }

    fn refresh<T: DecorTree + ?Sized>(&mut self, tree: &T, id: T::Id) {
        let items = tree.items(id);
        self.item_count = items.len();
        self.item_types.clear();
        self.item_types.extend(items.iter().map(item_type));
        tree.tag(id).clone_into(&mut self.tag);
        tree.layer(id).clone_into(&mut self.layer);
    }

    /// Returns `true` if the item at `index` was missing when the entry was last refreshed.
    pub fn is_missing(&self, index: usize) -> bool {
        matches!(self.item_types.get(index), Some(None))
    }
}

fn item_type(item: &AttachedItem) -> Option<String> {
    item.type_name().map(str::to_owned)
}

/// Decoration cache keyed by node identity.
pub struct DecorationCache<Id> {
    entries: FxHashMap<Id, DecorationEntry>,
}

impl<Id: Copy + Eq + std::hash::Hash> DecorationCache<Id> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Creates the node's entry, or refreshes the existing one in place.
    pub fn update_or_create<T>(&mut self, tree: &T, id: Id) -> &DecorationEntry
    where
        T: DecorTree<Id = Id> + ?Sized,
    {
        self.entries
            .entry(id)
            .and_modify(|entry| entry.refresh(tree, id))
            .or_insert_with(|| DecorationEntry::capture(tree, id))
    }

    pub fn get(&self, id: Id) -> Option<&DecorationEntry> {
        self.entries.get(&id)
    }

    /// Drops entries whose node no longer resolves. Returns how many were removed.
    pub fn purge_unresolved<T>(&mut self, tree: &T) -> usize
    where
        T: DecorTree<Id = Id> + ?Sized,
    {
        let before = self.entries.len();
        self.entries.retain(|id, _| tree.contains(*id));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Id: Copy + Eq + std::hash::Hash> Default for DecorationCache<Id> {
    fn default() -> Self {
        Self::new()
    }
}
