use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A heap allocation with room for `cap` values of `T`, none of which are tracked as initialized.
///
/// The owner is responsible for knowing which slots hold values and dropping them. Dropping a
/// Buffer only releases the memory.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        let mut buf = Buffer::new();
        buf.realloc(cap);
        buf
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the slot at `index`, reinterpreted as a pointer to `T`.
    ///
    /// # Safety
    /// `index` must be `<= cap`.
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that the offset stays within (or one past) the allocation.
        unsafe { self.ptr.as_ptr().add(index).cast() }
    }

    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// Reallocates the Buffer to hold exactly `new_cap` values. Values in slots `< new_cap` are
    /// preserved; anything above is forgotten without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            // Zero-sized types never need memory, the dangling pointer serves every slot.
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Buffer::<T>::make_layout(new_cap);

                // SAFETY: Layout has a non-zero size, because both zero capacity and zero-sized
                // types are guarded against.
                let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (old, 0) => {
                // SAFETY: ptr was allocated by the global allocator with the layout for old.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Buffer::<T>::make_layout(old)) }
                NonNull::dangling()
            },
            (old, _) => {
                let old_layout = Buffer::<T>::make_layout(old);
                let new_layout = Buffer::<T>::make_layout(new_cap);

                // SAFETY: The same allocator and layout are used as for the original allocation,
                // and the new size is > 0 and <= isize::MAX, as checked by make_layout.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            // SAFETY: ptr is allocated in the global allocator with exactly this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Buffer::<T>::make_layout(self.cap)) }
        }
    }
}
