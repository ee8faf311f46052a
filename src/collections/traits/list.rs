use crate::util::error::IndexOutOfBounds;

/// An indexed sequence, implemented by both [`ArrayList`](crate::collections::contiguous::ArrayList)
/// and [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).
///
/// All indices are 0-based. Insertion accepts any index in `0..=len`, while access, replacement
/// and removal accept `0..len`. A call that fails leaves the list unchanged.
pub trait List<T> {
    type Iter<'a>: Iterator<Item = &'a T> + ExactSizeIterator where Self: 'a, T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements from the list.
    fn clear(&mut self);

    /// Appends `value` to the end of the list.
    fn push(&mut self, value: T);

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Replaces the element at `index`, returning the previous value.
    fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds>;

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Returns a borrowed iterator from the first element to the last. Each call starts a fresh
    /// traversal.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == item)
    }

    /// Removes and returns the first element equal to `item`, or [`None`] if there isn't one.
    fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.iter().position(|element| element == item)?;
        self.try_remove(index).ok()
    }

    /// Appends a clone of every element in `other`, in order. Returns whether the call was
    /// accepted.
    fn add_all<L>(&mut self, other: &L) -> bool
    where
        L: List<T> + ?Sized,
        T: Clone,
    {
        for item in other.iter() {
            self.push(item.clone());
        }
        true
    }

    /// Copies the list into a new boxed slice, leaving the list untouched.
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the list into `holder` if it is long enough, otherwise into a new boxed slice of
    /// exactly [`len`](List::len) elements. Any elements of `holder` past `len` are left as they
    /// were.
    fn to_array_in(&self, holder: Box<[T]>) -> Box<[T]>
    where
        T: Clone,
    {
        copy_into_holder(self.iter(), holder)
    }
}

pub(crate) fn copy_into_holder<'a, T, I>(iter: I, mut holder: Box<[T]>) -> Box<[T]>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T> + ExactSizeIterator,
{
    if holder.len() < iter.len() {
        return iter.cloned().collect();
    }

    for (slot, item) in holder.iter_mut().zip(iter) {
        slot.clone_from(item);
    }
    holder
}
