use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

/// An owned allocation of `cap` slots for values of type `T`, none of which are assumed to be
/// initialized.
///
/// Buffer only manages memory. It never reads, writes or drops the values it holds, leaving that
/// to its owner, which is responsible for tracking which slots are initialized and dropping them
/// before the Buffer is dropped or shrunk past them.
///
/// Zero-sized types and zero capacity Buffers never allocate. They use a dangling pointer and only
/// track their capacity.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a new Buffer with capacity 0, without allocating.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Buffer with exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> Buffer<T> {
        let layout = Self::make_layout(cap);

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            Self::allocate(layout)
        };

        Buffer {
            ptr,
            cap,
            _phantom: PhantomData,
        }
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the first slot of the Buffer. The pointer is dangling (but properly
    /// aligned) if nothing has been allocated.
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Moves the contents of the Buffer into an allocation with exactly `new_cap` slots. The bytes
    /// of the first `min(cap, new_cap)` slots are preserved and any new slots are uninitialized.
    ///
    /// When shrinking, the caller must have already dropped any initialized values in the slots
    /// being released.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        if new_cap == self.cap {
            return;
        }

        let old_layout = Self::make_layout(self.cap);
        let new_layout = Self::make_layout(new_cap);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types: nothing was allocated and nothing needs to be. Only cap changes.
            (0, 0) => self.ptr,
            (0, _) => Self::allocate(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new_size) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, new_size is
                // non-zero and, having come from a valid Layout, doesn't exceed isize::MAX when
                // rounded up to the alignment.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates the [`Layout`] for `cap` slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        match Layout::array::<MaybeUninit<T>>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    /// Allocates memory for a non-zero sized `layout`.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] rather
    /// than panicking.
    fn allocate(layout: Layout) -> NonNull<MaybeUninit<T>> {
        NonNull::new(
            // SAFETY: Zero-sized layouts are never passed to allocate.
            unsafe { alloc::alloc(layout).cast() }
        ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("Capacity overflow!")
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator when the layout has a
            // non-zero size, and layout is the one it was allocated with.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so sending it is the same as sending the values
// it may contain.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer has no interior mutability, all writes require either &mut self or a raw pointer
// whose use is governed by the owner.
unsafe impl<T: Sync> Sync for Buffer<T> {}
