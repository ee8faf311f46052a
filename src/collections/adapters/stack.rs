use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::contiguous::ArrayList;
use crate::collections::traits::list::copy_into_holder;
use crate::util::error::EmptyStructure;
use crate::util::result::ResultExtension;

/// A last-in, first-out stack. The top of the stack is the last element of the backing
/// [`ArrayList`], so `push` and `pop` are amortized `O(1)`.
///
/// Iteration, [`to_array`](Stack::to_array) and equality all run from the top of the stack down
/// to the bottom.
pub struct Stack<T> {
    pub(crate) list: ArrayList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            list: ArrayList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Always false, a Stack grows until memory runs out.
    pub const fn is_full(&self) -> bool {
        false
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Places `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use adt_collections::collections::adapters::Stack;
    /// let mut stack = Stack::new();
    /// stack.push("a");
    /// stack.push("b");
    /// assert_eq!(stack.pop(), "b");
    /// assert_eq!(stack.pop(), "a");
    /// assert!(stack.try_pop().is_err());
    /// ```
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    pub fn try_pop(&mut self) -> Result<T, EmptyStructure> {
        self.list.pop().ok_or(EmptyStructure)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyStructure> {
        self.list.last().ok_or(EmptyStructure)
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.list.iter().rev()
    }

    /// Copies the stack, top first, into a new boxed slice.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the stack, top first, into `holder` if it is long enough, otherwise into a new
    /// boxed slice of exactly [`len`](Stack::len) elements.
    pub fn to_array_in(&self, holder: Box<[T]>) -> Box<[T]>
    where
        T: Clone,
    {
        copy_into_holder(self.iter(), holder)
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.list.contains(item)
    }

    /// Returns the 1-based distance of the topmost element equal to `item` from the top of the
    /// stack (the top itself is 1), or [`None`] if there isn't one.
    pub fn search(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item).map(|distance| distance + 1)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Rev<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pops every element, top first.
impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = Rev<crate::collections::contiguous::array_list::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter().rev()
    }
}

/// Pushes each element in turn, so the last one yielded ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_to_bottom", &self.iter().collect::<Box<[_]>>())
            .field("len", &self.len())
            .finish()
    }
}
