use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use super::handle::Handle;

/// The most slots an arena can address: every index up to `Handle::MAX`.
pub(crate) const MAX_SLOTS: usize = Handle::MAX + 1;

/// Slot storage for tree nodes.
///
/// A removed node leaves a hole that the next `alloc` fills again, so a
/// handle is only meaningful while its node is live.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    cells: Vec<Option<T>>,
    holes: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            cells: Vec::new(),
            holes: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity.min(MAX_SLOTS)),
            holes: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cells.capacity().min(MAX_SLOTS)
    }

    /// Live nodes: every cell that is not a hole.
    pub(crate) const fn len(&self) -> usize {
        self.cells.len().saturating_sub(self.holes.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes sure the next `additional` calls to `alloc` neither reallocate
    /// nor run out of handles.
    ///
    /// # Errors
    ///
    /// Fails with a capacity-overflow error when the arena cannot address
    /// that many nodes, or with the allocator's error when memory runs out.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let fresh = additional.saturating_sub(self.holes.len());
        if fresh == 0 {
            return Ok(());
        }
        if fresh > MAX_SLOTS - self.cells.len() {
            return Err(capacity_overflow());
        }
        self.cells.try_reserve(fresh)?;
        // `take` pushes a hole for every cell; keep that infallible too.
        self.holes.try_reserve(fresh)
    }

    pub(crate) fn alloc(&mut self, node: T) -> Handle {
        match self.holes.pop() {
            Some(hole) => {
                self.cells[hole.to_index()] = Some(node);
                hole
            }
            None => {
                let index = self.cells.len();
                assert!(index < MAX_SLOTS, "`Arena::alloc()` - no handle left for index {index}!");
                self.cells.push(Some(node));
                Handle::from_index(index)
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.cells[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.cells[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Moves the node out and turns its cell into a hole.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let node = self.cells[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.holes.push(handle);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
        self.holes.clear();
    }
}

/// `TryReserveError` has no public constructor; an impossible request yields
/// the `CapacityOverflow` kind without allocating.
fn capacity_overflow() -> TryReserveError {
    Vec::<u8>::new()
        .try_reserve(usize::MAX)
        .expect_err("`Arena::try_reserve()` - reserving `usize::MAX` bytes succeeded!")
}
