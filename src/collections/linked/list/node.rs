use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// Nodes are allocated with Box and leaked into NodePtrs. Ownership of a node belongs to the list,
// and follows the `next` links from the head: the list frees nodes only by walking them in that
// direction. A `prev` link is only ever used to find a node, never to free one.
//
// A NodePtr is only ever dereferenced by the list that owns the node, or by a cursor whose
// generation matches that list, so the node it points to is always live.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims ownership of the node, after which this pointer (and every copy of it) dangles.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created from a Box in from_node, and each node is only taken
        // once, by the list that owns it, as part of unlinking it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live (see above). The returned lifetime is bound by the caller to a
        // borrow of the owning list.
        unsafe { &self.0.as_ref().value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is live, and the caller binds the returned lifetime to a unique borrow
        // of the owning list.
        unsafe { &mut self.0.as_mut().value }
    }

    pub const fn prev(&self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { self.0.as_ref().prev }
    }

    pub const fn next(&self) -> Link<T> {
        // SAFETY: The node is live.
        unsafe { self.0.as_ref().next }
    }

    pub fn set_prev(&mut self, prev: Link<T>) {
        // SAFETY: The node is live and no reference to its links outlives a single method call.
        unsafe { self.0.as_mut().prev = prev; }
    }

    pub fn set_next(&mut self, next: Link<T>) {
        // SAFETY: The node is live and no reference to its links outlives a single method call.
        unsafe { self.0.as_mut().next = next; }
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

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
