use std::ops::{Deref, DerefMut};

use crate::{
    iterator::{BreadthFirstIter, DepthFirstIter, IterNode},
    link,
    node::{ChildHandle, Node},
    NodeId, TreeError,
};

pub mod arc;
pub mod rc;

/// Sealed trait for node reference backends
pub(crate) mod internal {
    pub trait Sealed {}
}

/// A clonable handle to a tree node.
///
/// Handles compare by identity: two handles are the same node when
/// [`TreeNodeRef::ptr_eq`] holds. Parents hold strong handles to their children,
/// children hold a weak handle back to their parent.
///
/// All structural mutation goes through [`TreeNodeRef::set_parent`],
/// [`TreeNodeRef::add_child`] and [`TreeNodeRef::remove_child`], which keep
/// "C is a child of P" and "P is the parent of C" in agreement after every call.
pub trait TreeNodeRef: internal::Sealed + ChildHandle + Clone {
    type Data;

    /// Non-owning handle used for parent links
    type WeakRef: Clone;

    /// Held for the whole of a link mutation
    type LinkGuard;

    type InnerRef<'b>: Deref<Target = Node<Self::Data, Self::WeakRef, Self>>
    where
        Self: 'b;

    type InnerRefMut<'b>: DerefMut<Target = Node<Self::Data, Self::WeakRef, Self>>
    where
        Self: 'b;

    type DataRef<'b>: Deref<Target = Self::Data>
    where
        Self: 'b;

    /// Create a standalone node with no parent and no children
    fn new(value: Self::Data) -> Self;

    /// Get a reference to the inner node
    fn node<'b>(&'b self) -> Self::InnerRef<'b>;

    #[doc(hidden)]
    fn node_mut<'b>(&'b self) -> Self::InnerRefMut<'b>;

    /// Get a reference to the node's value.
    ///
    /// The returned guard must be released before mutating links of this node.
    fn value<'b>(&'b self) -> Self::DataRef<'b>;

    fn downgrade(&self) -> Self::WeakRef;

    fn upgrade(weak: &Self::WeakRef) -> Option<Self>;

    /// Returns true if both handles point at the same node
    fn ptr_eq(&self, other: &Self) -> bool;

    /// Serialize link mutations of this backend
    #[doc(hidden)]
    fn lock_links() -> Self::LinkGuard;

    fn id(&self) -> NodeId {
        self.node().id()
    }

    /// The current parent. A parent that has been dropped reads as `None`.
    fn parent(&self) -> Option<Self> {
        let node = self.node();
        node.parent_link().and_then(Self::upgrade)
    }

    /// Snapshot of the children in insertion order
    fn children(&self) -> Vec<Self> {
        self.node().children().to_vec()
    }

    fn num_children(&self) -> usize {
        self.node().num_children()
    }

    fn has_child(&self, node: &Self) -> bool {
        self.node().children().iter().any(|child| child.ptr_eq(node))
    }

    fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }

    /// Assign a new parent, or detach with `None`.
    ///
    /// Assigning the current parent again is a no-op and keeps the parent's
    /// children order untouched.
    ///
    /// # Errors
    ///
    /// [`TreeError::Cycle`] when `parent` is this node or one of its
    /// descendants. Nothing is changed in that case.
    fn set_parent(&self, parent: Option<&Self>) -> Result<(), TreeError> {
        link::reparent(self, parent)
    }

    /// Append `node` as the last child, detaching it from any previous parent.
    /// Adding a node that is already a child does nothing.
    ///
    /// # Errors
    ///
    /// [`TreeError::Cycle`] when `node` is this node or one of its ancestors.
    fn add_child(&self, node: &Self) -> Result<(), TreeError> {
        link::add_child(self, node)
    }

    /// Remove `node` from the children and clear its parent link.
    /// Does nothing when `node` is not a child of this node.
    fn remove_child(&self, node: &Self) {
        link::remove_child(self, node);
    }

    /// Detach this node from its parent, if any
    fn detach(&self) {
        link::detach(self);
    }

    /// Ancestors of this node, nearest first
    fn ancestors(&self) -> Vec<Self> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(parent) = current {
            current = parent.parent();
            ancestors.push(parent);
        }
        ancestors
    }

    /// The topmost ancestor, or this node when it has no parent
    fn root(&self) -> Self {
        self.ancestors().pop().unwrap_or_else(|| self.clone())
    }

    /// Number of ancestors above this node
    fn depth(&self) -> usize {
        self.ancestors().len()
    }

    fn is_ancestor_of(&self, other: &Self) -> bool {
        let mut current = other.parent();
        while let Some(parent) = current {
            if parent.ptr_eq(self) {
                return true;
            }
            current = parent.parent();
        }
        false
    }

    /// Pre-order iterator over the subtree rooted at this node
    fn iter(&self) -> DepthFirstIter<Self> {
        DepthFirstIter::new(self.clone())
    }

    /// Level-order iterator over the subtree rooted at this node
    fn iter_breadth(&self) -> BreadthFirstIter<Self> {
        BreadthFirstIter::new(self.clone())
    }

    /// Depth-first (pre-order) search for a node holding `target`
    fn depth_search(&self, target: &Self::Data) -> Option<Self>
    where
        Self::Data: PartialEq,
    {
        self.depth_search_by(|value| value == target)
    }

    /// Breadth-first (level-order) search for a node holding `target`
    fn breadth_search(&self, target: &Self::Data) -> Option<Self>
    where
        Self::Data: PartialEq,
    {
        self.breadth_search_by(|value| value == target)
    }

    fn depth_search_by<F>(&self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&Self::Data) -> bool,
    {
        self.iter()
            .find(|item| predicate(&*item.value()))
            .map(IterNode::into_node)
    }

    fn breadth_search_by<F>(&self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&Self::Data) -> bool,
    {
        self.iter_breadth()
            .find(|item| predicate(&*item.value()))
            .map(IterNode::into_node)
    }

    /// Calls the provided closure for each node in the subtree, in pre-order.
    /// Includes depth of the node in the first parameter of the closure
    fn for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, Self) -> Result<(), E>,
    {
        for item in self.iter() {
            let depth = item.depth();
            f(depth, item.into_node())?;
        }
        Ok(())
    }
}

/// Debug output shared by the backends. Links are printed as ids so formatting
/// never recurses through the tree.
pub(crate) fn debug_node<R>(
    node: &R,
    name: &str,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result
where
    R: TreeNodeRef,
    R::Data: std::fmt::Debug,
{
    let parent_id = node.parent().map(|parent| parent.id());
    let child_ids: Vec<NodeId> = node.children().iter().map(|child| child.id()).collect();

    f.debug_struct(name)
        .field("id", &node.id())
        .field("value", &*node.value())
        .field("parent_id", &parent_id)
        .field("child_ids", &child_ids)
        .finish()
}
