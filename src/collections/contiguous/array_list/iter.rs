use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::ArrayList;
use crate::collections::contiguous::buffer::Buffer;

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // Take the buffer and zero len, so that dropping the emptied list is a no-op.
        self.len = 0;
        let buf = mem::replace(&mut self.buf, Buffer::new());

        IntoIter {
            buf,
            start: 0,
            end,
        }
    }
}

/// An owned iterator over the elements of an [`ArrayList`]. Values in `start..end` are still
/// initialized and owned by the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the value is initialized, and start is advanced so it is never
        // read again.
        let value = unsafe { self.buf.slot(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The old end - 1 is initialized, and end has been moved below it.
        Some(unsafe { self.buf.slot(self.end).read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Exactly the values in start..end are still initialized.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
