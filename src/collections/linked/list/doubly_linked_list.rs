use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::collections::traits::List;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
/// | `index_of` | `O(n)` |
///
/// # Indexing
/// Every indexed method is 0-based, with the exception of [`index_of`](DoublyLinkedList::index_of),
/// which reports 1-based positions.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

/// The pointers of a non-empty list. Copying this doesn't copy any nodes.
pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.state.len()
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Drops every node in the list.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Appends `value`. Equivalent to [`push_back`](DoublyLinkedList::push_back).
    pub fn push(&mut self, value: T) {
        self.push_back(value);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: head is unlinked from the list below, so it is never used again.
                let node = unsafe { head.take_node() };

                match (len.checked_sub(1), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    // A length of one means the head was also the tail.
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: tail is unlinked from the list below, so it is never used again.
                let node = unsafe { tail.take_node() };

                match (len.checked_sub(1), node.prev) {
                    (Some(new_len), Some(new_tail)) => {
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`. An index equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        match index {
            0 => self.push_front(value),
            i if i == len => self.push_back(value),
            i if i > len => return Err(IndexOutOfBounds { index, len }),
            i => {
                // 0 < i < len, so the list is full and the new node goes between two others.
                if let Full(contents) = &mut self.state {
                    contents.insert_between(i, value);
                }
            },
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        let out_of_bounds = IndexOutOfBounds { index, len };
        match index {
            i if i >= len => Err(out_of_bounds),
            0 => self.pop_front().ok_or(out_of_bounds),
            i if i == len - 1 => self.pop_back().ok_or(out_of_bounds),
            i => match &mut self.state {
                Full(contents) => Ok(contents.remove_between(i)),
                Empty => Err(out_of_bounds),
            },
        }
    }

    /// Replaces the element at `index`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, new_value))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the **1-based** position of the first element equal to `item`, or [`None`] if there
    /// isn't one. Unlike every other indexed method on this type, the first element is at 1.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(list.index_of(&"a"), Some(1));
    /// assert_eq!(list.index_of(&"c"), Some(3));
    /// assert_eq!(list.index_of(&"d"), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item).map(|index| index + 1)
    }

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

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr, "The last node reached should be the tail.");
                assert_eq!(count, len.get(), "The node count should match the length.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, walking from whichever end is closer.
    ///
    /// `index` must be less than len.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: The caller ensures that count steps stay within the list.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: The caller ensures that count steps stay within the list.
            node = unsafe { node.prev().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Links a new node in at `index`, where `0 < index < len`.
    pub fn insert_between(&mut self, index: usize, value: T) {
        // Seek before updating len, seek relies on it to pick a direction.
        let next_node = self.seek(index);
        // SAFETY: index > 0, so the node currently there has a predecessor.
        let prev_node = unsafe { next_node.prev().unwrap_unchecked() };

        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(prev_node),
            next: Some(next_node),
        });

        *prev_node.next_mut() = Some(node);
        *next_node.prev_mut() = Some(node);
    }

    /// Unlinks and returns the value at `index`, where `0 < index < len - 1`.
    pub fn remove_between(&mut self, index: usize) -> T {
        // SAFETY: The node is unlinked below and its pointer isn't kept anywhere else.
        let node = unsafe { self.seek(index).take_node() };

        // SAFETY: Interior nodes have both neighbours. Head and tail removals are handled with
        // pop_front / pop_back instead.
        unsafe {
            *node.prev.unwrap_unchecked().next_mut() = node.next;
            *node.next.unwrap_unchecked().prev_mut() = node.prev;
        }
        // An interior node was removed, so at least two remain.
        if let Some(new_len) = self.len.checked_sub(1) {
            self.len = new_len;
        }

        node.value
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }

    /// Copies the pointers, without touching any nodes.
    pub const fn shallow_copy(&self) -> ListContents<T> {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn shallow_copy(&self) -> ListState<T> {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.shallow_copy()),
        }
    }
}

impl<T> List<T> for DoublyLinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        self.state.len()
    }

    fn clear(&mut self) {
        DoublyLinkedList::clear(self)
    }

    fn push(&mut self, value: T) {
        self.push_back(value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        DoublyLinkedList::try_insert(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        DoublyLinkedList::try_get(self, index)
    }

    fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        DoublyLinkedList::try_replace(self, index, value)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        DoublyLinkedList::try_remove(self, index)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        DoublyLinkedList::iter(self)
    }

    /// Appends a clone of every element in `other`. Returns false, without changing anything, if
    /// `other` is empty.
    fn add_all<L>(&mut self, other: &L) -> bool
    where
        L: List<T> + ?Sized,
        T: Clone,
    {
        if other.is_empty() {
            return false;
        }

        for item in other.iter() {
            self.push_back(item.clone());
        }
        true
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = mem::replace(&mut self.state, Empty) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: Every node is reachable exactly once by following next links, and the
                // list has already been emptied.
                unsafe { ptr.drop_node(); }
            }
        }
    }
}

// SAFETY: The list uniquely owns all of its nodes, so it can be sent when T: Send.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access only hands out shared references to T, so the list is Sync when T: Sync.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Box<[_]>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
