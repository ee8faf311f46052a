//! [`serde`] support for every collection. Each is written as a flat sequence: lists and queues
//! from front to back, stacks from bottom to top and trees in preorder, so that deserializing
//! reproduces the same structure.

use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, Serializer};

#[cfg(feature = "adapters")]
use crate::collections::adapters::{Queue, Stack};
#[cfg(feature = "binary-tree")]
use crate::collections::binary_tree::BinarySearchTree;
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::ArrayList;
#[cfg(feature = "linked")]
use crate::collections::linked::DoublyLinkedList;

/// Builds any collection that can be extended one element at a time, in sequence order.
struct SeqVisitor<C, T> {
    expecting: &'static str,
    _phantom: PhantomData<(C, T)>,
}

impl<C, T> SeqVisitor<C, T> {
    const fn new(expecting: &'static str) -> SeqVisitor<C, T> {
        SeqVisitor {
            expecting,
            _phantom: PhantomData,
        }
    }
}

impl<'de, C, T> Visitor<'de> for SeqVisitor<C, T>
where
    C: Default + Extend<T>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut collection = C::default();
        while let Some(element) = seq.next_element()? {
            collection.extend(Some(element));
        }
        Ok(collection)
    }
}

#[cfg(feature = "contiguous")]
impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "contiguous")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of list elements"))
    }
}

#[cfg(feature = "linked")]
impl<T: Serialize> Serialize for DoublyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "linked")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for DoublyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of list elements"))
    }
}

#[cfg(feature = "adapters")]
impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Bottom first, so that pushing in sequence order rebuilds the stack.
        serializer.collect_seq(self.list.iter())
    }
}

#[cfg(feature = "adapters")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of stack elements, bottom first"))
    }
}

#[cfg(feature = "adapters")]
impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "adapters")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of queue elements, head first"))
    }
}

#[cfg(feature = "binary-tree")]
impl<T: Serialize> Serialize for BinarySearchTree<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.preorder_iter())
    }
}

#[cfg(feature = "binary-tree")]
impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for BinarySearchTree<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let preorder: Vec<T> = deserializer.deserialize_seq(SeqVisitor::new(
            "a preorder sequence of unique tree elements",
        ))?;
        BinarySearchTree::from_preorder(preorder).map_err(de::Error::custom)
    }
}
