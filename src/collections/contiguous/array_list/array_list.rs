use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::buffer::Buffer;
use crate::collections::traits::List;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidArgument};
use crate::util::result::ResultExtension;

/// The capacity of a list created with [`ArrayList::new`].
pub const DEFAULT_CAP: usize = 10;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous list. The backing buffer doubles in capacity whenever an element is
/// added to a full list, and never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct ArrayList<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 10);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ArrayList with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if `cap` is zero, or if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList::try_with_cap(cap).throw()
    }

    /// Creates a new, empty ArrayList with capacity exactly equal to `cap`, returning an [`Err`]
    /// for a capacity of zero, which doubling would never grow.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn try_with_cap(cap: usize) -> Result<ArrayList<T>, InvalidArgument> {
        if cap == 0 {
            return Err(InvalidArgument { reason: "initial capacity must be non-zero" });
        }

        Ok(ArrayList {
            buf: Buffer::with_cap(cap),
            len: 0,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the backing buffer.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Drops every element, keeping the allocated buffer for reuse.
    pub fn clear(&mut self) {
        let elements = ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr().cast::<T>(), self.len);
        // Set len first, so that a panicking drop can't lead to a double drop.
        self.len = 0;
        // SAFETY: All values in 0..len were initialized and are no longer reachable through self.
        unsafe { ptr::drop_in_place(elements) }
    }

    /// Appends `value` to the end of the ArrayList, doubling the capacity if it is full.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::with_cap(1);
    /// for i in 0..5 {
    ///     list.push(i);
    /// }
    /// assert_eq!(list.as_slice(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: There is capacity for at least one more value at index len.
        unsafe { self.buf.slot(self.len).write(value) }
        self.len += 1;
    }

    /// Removes the last element and returns it, if the ArrayList isn't empty.
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The value at the old last index is initialized, and len has been decremented so
        // it won't be read or dropped again.
        Some(unsafe { self.buf.slot(self.len).read() })
    }

    /// Returns a reference to the last element, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.as_slice().get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Inserts `value` at `index`, shifting all following elements one place to the right. An
    /// index equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (0..3).collect();
    /// list.insert(1, 100);
    /// list.insert(1, 200);
    /// list.insert(5, 300);
    /// assert_eq!(list.as_slice(), &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source and destination ranges are within the
        // allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes the element at `index`, shifting all following elements one place to the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub const fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        // SAFETY: index < len, so the value is initialized. After the read, the following values
        // are moved down over it and len is reduced, so nothing is dropped twice.
        let value = unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: All values in 0..len are initialized, and the pointer is nonnull and properly
        // aligned. The borrow on self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len) }
    }

    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As for as_slice, with the unique borrow on self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Grows the buffer by [`GROWTH_FACTOR`], so that at least one more element fits.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .throw()
            .max(1);

        self.buf.realloc(new_cap);
    }
}

impl<T: PartialEq> ArrayList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `item` and returns it, or [`None`] if no element
    /// matched.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.iter().position(|element| element == item)?;
        self.try_remove(index).ok()
    }
}

impl<T> List<T> for ArrayList<T> {
    type Iter<'a> = slice::Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        ArrayList::clear(self)
    }

    fn push(&mut self, value: T) {
        ArrayList::push(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        ArrayList::try_insert(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        ArrayList::try_get(self, index)
    }

    fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        ArrayList::try_replace(self, index, value)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        ArrayList::try_remove(self, index)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        ArrayList::iter(self)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = ArrayList::with_cap(iter.size_hint().0.max(DEFAULT_CAP));
        list.extend(iter);
        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.buf, which deallocates the memory without touching any values.
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

// SAFETY: ArrayLists, when used safely, rely on unique pointers and are therefore safe for Send
// when T: Send.
unsafe impl<T: Send> Send for ArrayList<T> {}
// SAFETY: ArrayList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that ArrayList<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for ArrayList<T> {}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList::with_cap(self.cap());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
