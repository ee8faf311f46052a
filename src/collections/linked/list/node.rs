use std::ptr::NonNull;

/// A link to a neighbouring node. A node's `next` link owns the node it points to, while `prev`
/// is only a back-reference and is never used to free anything.
pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because dereferencing a Box allows the
// node to be moved back off the heap in take_node.

pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node off the heap, freeing its allocation.
    ///
    /// # Safety
    /// The pointer must not be used again, by this copy or any other.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by Box in from_node and, per the caller, is only freed
        // once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The pointer must not be used again, by this copy or any other.
    pub unsafe fn drop_node(self) {
        // SAFETY: As for take_node.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }

    // The accessors below hand out references with an unbounded lifetime. The list types that
    // hold NodePtrs are responsible for tying those references to a borrow of themselves.

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Every NodePtr held by a list points to a live node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above, with uniqueness provided by the owning list's &mut borrow.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: Every NodePtr held by a list points to a live node.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Only called while the owning list is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: Every NodePtr held by a list points to a live node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Only called while the owning list is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
