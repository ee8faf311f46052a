use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::collections::linked::list::{IntoIter, Iter};
use crate::collections::traits::List;
use crate::util::error::EmptyStructure;
use crate::util::result::ResultExtension;

/// A first-in, first-out queue. Elements are enqueued at the tail of the backing
/// [`DoublyLinkedList`] and dequeued from its head, both in `O(1)`.
pub struct Queue<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            list: DoublyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Always false, a Queue grows until memory runs out.
    pub const fn is_full(&self) -> bool {
        false
    }

    /// Adds `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::adapters::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), 1);
    /// assert_eq!(queue.dequeue(), 2);
    /// assert!(queue.try_dequeue().is_err());
    /// ```
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().throw()
    }

    pub fn try_dequeue(&mut self) -> Result<T, EmptyStructure> {
        self.list.pop_front().ok_or(EmptyStructure)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyStructure> {
        self.list.front().ok_or(EmptyStructure)
    }

    /// Removes every element from the queue.
    pub fn dequeue_all(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Copies the queue, front first, into a new boxed slice.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.list.to_array()
    }

    /// Copies the queue, front first, into `holder` if it is long enough, otherwise into a new
    /// boxed slice of exactly [`len`](Queue::len) elements.
    pub fn to_array_in(&self, holder: Box<[T]>) -> Box<[T]>
    where
        T: Clone,
    {
        self.list.to_array_in(holder)
    }
}

impl<T: PartialEq> Queue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.list.contains(item)
    }

    /// Returns the **1-based** position of the first element equal to `item`, counting from the
    /// front of the queue, or [`None`] if there isn't one. See
    /// [`DoublyLinkedList::index_of`].
    pub fn search(&self, item: &T) -> Option<usize> {
        self.list.index_of(item)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dequeues every element, front first.
impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_to_back", &self.iter().collect::<Box<[_]>>())
            .field("len", &self.len())
            .finish()
    }
}
