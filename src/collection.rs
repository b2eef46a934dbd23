//! Owned-child collections
//!
//! Child objects live behind a [`Handle`], a shared identity handle that
//! remembers which collection currently owns it. An [`OwnedCollection`]
//! enforces the ownership rules at its mutation boundary:
//!
//! - a handle owned by another collection cannot be added
//! - a handle already present cannot be added again
//! - removing detaches the handle and hands it back to the caller
//!
//! Rejected mutations return `false`/`None` and leave the collection
//! unchanged. Order of insertion is preserved and reflects document order.
//!
//! Handles are `Send + Sync` when the child is, so a whole document can move
//! between threads or sit behind an external lock. Claiming a handle for a
//! collection is a single atomic compare-and-swap.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(1);

/// Owner slot value of a handle no collection owns
const NO_OWNER: u64 = 0;

/// Identity of an owning collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    fn next() -> Self {
        OwnerId(NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct Slot<T> {
    owner: AtomicU64,
    value: RwLock<T>,
}

/// Shared handle to a child object
///
/// Cloning a handle clones the reference, not the object. Two handles are the
/// same child if [`Handle::ptr_eq`] holds.
pub struct Handle<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Handle<T> {
    /// Wrap a value in a new, unowned handle
    pub fn new(value: T) -> Self {
        Self {
            slot: Arc::new(Slot {
                owner: AtomicU64::new(NO_OWNER),
                value: RwLock::new(value),
            }),
        }
    }

    /// Borrow the object
    ///
    /// Blocks while another thread holds a mutable borrow.
    pub fn borrow(&self) -> RwLockReadGuard<'_, T> {
        self.slot.value.read()
    }

    /// Borrow the object mutably
    ///
    /// Blocks while any other borrow is held.
    pub fn borrow_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.slot.value.write()
    }

    /// Check if both handles refer to the same object
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }

    /// Check if the object is owned by a collection
    pub fn has_owner(&self) -> bool {
        self.owner().is_some()
    }

    /// Get the owning collection, if any
    pub fn owner(&self) -> Option<OwnerId> {
        match self.slot.owner.load(Ordering::Acquire) {
            NO_OWNER => None,
            id => Some(OwnerId(id)),
        }
    }

    /// Unwrap the object if this is the last handle to it
    pub fn try_unwrap(self) -> Result<T, Handle<T>> {
        match Arc::try_unwrap(self.slot) {
            Ok(slot) => Ok(slot.value.into_inner()),
            Err(slot) => Err(Handle { slot }),
        }
    }

    /// Record `owner` unless the handle is owned already
    fn claim(&self, owner: OwnerId) -> std::result::Result<(), OwnerId> {
        self.slot
            .owner
            .compare_exchange(NO_OWNER, owner.0, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(OwnerId)
    }

    fn release(&self) {
        self.slot.owner.store(NO_OWNER, Ordering::Release);
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("owner", &self.owner())
            .field("value", &self.slot.value)
            .finish()
    }
}

/// Ordered collection of exclusively owned child objects
pub struct OwnedCollection<T> {
    id: OwnerId,
    items: Vec<Handle<T>>,
}

impl<T> OwnedCollection<T> {
    /// Create an empty collection with a fresh owner identity
    pub fn new() -> Self {
        Self {
            id: OwnerId::next(),
            items: Vec::new(),
        }
    }

    /// Owner identity recorded on children of this collection
    pub fn id(&self) -> OwnerId {
        self.id
    }

    /// Add a child at the end of the collection
    ///
    /// Returns `false` without changing anything if the child already has an
    /// owner (this collection or another one).
    pub fn add(&mut self, child: &Handle<T>) -> bool {
        if self.contains(child) {
            debug!("rejected child: already present");
            return false;
        }
        if let Err(owner) = child.claim(self.id) {
            debug!(
                "rejected child: already owned by {}",
                if owner == self.id { "this collection" } else { "another collection" }
            );
            return false;
        }
        self.items.push(child.clone());
        true
    }

    /// Wrap `value` in a new handle and add it
    pub fn push(&mut self, value: T) -> Handle<T> {
        let handle = Handle {
            slot: Arc::new(Slot {
                owner: AtomicU64::new(self.id.0),
                value: RwLock::new(value),
            }),
        };
        self.items.push(handle.clone());
        handle
    }

    /// Remove a child by identity
    ///
    /// Returns `false` if the child is not part of this collection.
    pub fn remove(&mut self, child: &Handle<T>) -> bool {
        match self.position(child) {
            Some(index) => self.remove_at(index).is_some(),
            None => {
                debug!("rejected removal: child not present");
                false
            }
        }
    }

    /// Remove the child at `index` and hand it back detached
    pub fn remove_at(&mut self, index: usize) -> Option<Handle<T>> {
        if index >= self.items.len() {
            debug!(
                "rejected removal: index {} out of range ({} children)",
                index,
                self.items.len()
            );
            return None;
        }
        let child = self.items.remove(index);
        child.release();
        Some(child)
    }

    /// Number of children
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection has no children
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the child at `index`
    pub fn at(&self, index: usize) -> Option<&Handle<T>> {
        self.items.get(index)
    }

    /// Check if `child` is part of this collection
    pub fn contains(&self, child: &Handle<T>) -> bool {
        self.position(child).is_some()
    }

    /// Index of `child` in this collection
    pub fn position(&self, child: &Handle<T>) -> Option<usize> {
        self.items.iter().position(|item| item.ptr_eq(child))
    }

    /// Iterate over the children in order
    pub fn iter(&self) -> std::slice::Iter<'_, Handle<T>> {
        self.items.iter()
    }

    /// Detach and drop all children
    pub fn clear(&mut self) {
        for child in self.items.drain(..) {
            child.release();
        }
    }
}

impl<T> Default for OwnedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OwnedCollection<T> {
    fn drop(&mut self) {
        // Handles kept alive elsewhere become free again
        self.clear();
    }
}

/// Copies get a fresh owner identity and new handles holding copies of the
/// children, so the copy never shares a child with the source.
impl<T: Clone> Clone for OwnedCollection<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for item in &self.items {
            copy.push(item.borrow().clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in &source.items {
            self.push(item.borrow().clone());
        }
    }
}

/// Element-wise value equality, order sensitive
impl<T: PartialEq> PartialEq for OwnedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| a.ptr_eq(b) || *a.borrow() == *b.borrow())
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.items.iter().map(|item| &item.slot.value))
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a OwnedCollection<T> {
    type Item = &'a Handle<T>;
    type IntoIter = std::slice::Iter<'a, Handle<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
