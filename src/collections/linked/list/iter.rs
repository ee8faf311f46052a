use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{DoublyLinkedList, ListContents, ListState};
use ListState::*;

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over a [`DoublyLinkedList`], yielding head to tail.
pub struct IntoIter<T> {
    // The iterator just holds the list and pops from either end.
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.shallow_copy(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over a [`DoublyLinkedList`], yielding head to tail.
pub struct Iter<'a, T> {
    // The remaining range, as a view of the list. The nodes themselves are never modified, len
    // tracks the number of items left to yield from either end.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let value = head.value();

                match (len.checked_sub(1), head.next()) {
                    (Some(new_len), Some(new_head)) => {
                        *head = *new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let value = tail.value();

                match (len.checked_sub(1), tail.prev()) {
                    (Some(new_len), Some(new_tail)) => {
                        *tail = *new_tail;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.shallow_copy(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.shallow_copy(),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowed iterator over a [`DoublyLinkedList`], yielding head to tail.
pub struct IterMut<'a, T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let value = head.value_mut();

                match (len.checked_sub(1), head.next()) {
                    (Some(new_len), Some(new_head)) => {
                        *head = *new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let value = tail.value_mut();

                match (len.checked_sub(1), tail.prev()) {
                    (Some(new_len), Some(new_tail)) => {
                        *tail = *new_tail;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(value)
            },
        }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}
