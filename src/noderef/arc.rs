use std::sync::{Arc, Weak};

use parking_lot::{
    MappedRwLockReadGuard, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use crate::{
    display::TreeDisplay,
    iterator::{DepthFirstIter, IterNode},
    node::{ChildHandle, Node},
};

use super::{debug_node, internal, TreeNodeRef};

type Inner<T> = RwLock<Node<T, WeakNodeRef<T>, NodeRef<T>>>;

/// Serializes every link mutation of arc nodes in the process. Nodes move
/// between trees, so there is no smaller lock that covers old parent, child
/// and new parent together.
static LINKS: Mutex<()> = parking_lot::const_mutex(());

/// Thread safe node handle with one reader-writer lock per node.
///
/// Link mutations from any number of threads are serialized and always leave
/// the single-parent and acyclic invariants intact. Readers only take the lock
/// of the node they are reading, so a reader on another thread can observe a
/// move half done: the child already detached from its old parent but not yet
/// listed under the new one.
pub struct NodeRef<T> {
    node_ref: Arc<Inner<T>>,
}

/// Non-owning parent link of an arc [`NodeRef`]
pub struct WeakNodeRef<T> {
    node_ref: Weak<Inner<T>>,
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        Self {
            node_ref: self.node_ref.clone(),
        }
    }
}

impl<T> Clone for WeakNodeRef<T> {
    fn clone(&self) -> Self {
        Self {
            node_ref: self.node_ref.clone(),
        }
    }
}

impl<T> internal::Sealed for NodeRef<T> {}

impl<T> ChildHandle for NodeRef<T> {
    fn into_children(self) -> Vec<Self> {
        Arc::into_inner(self.node_ref)
            .map(|node| std::mem::take(node.into_inner().children_mut()))
            .unwrap_or_default()
    }
}

impl<T> TreeNodeRef for NodeRef<T> {
    type Data = T;
    type WeakRef = WeakNodeRef<T>;
    type LinkGuard = MutexGuard<'static, ()>;
    type InnerRef<'b> = RwLockReadGuard<'b, Node<T, WeakNodeRef<T>, Self>> where Self: 'b;
    type InnerRefMut<'b> = RwLockWriteGuard<'b, Node<T, WeakNodeRef<T>, Self>> where Self: 'b;
    type DataRef<'b> = MappedRwLockReadGuard<'b, T> where Self: 'b;

    fn new(value: T) -> Self {
        Self {
            node_ref: Arc::new(RwLock::new(Node::new(value))),
        }
    }

    fn node<'b>(&'b self) -> Self::InnerRef<'b> {
        self.node_ref.read()
    }

    fn node_mut<'b>(&'b self) -> Self::InnerRefMut<'b> {
        self.node_ref.write()
    }

    fn value<'b>(&'b self) -> Self::DataRef<'b> {
        RwLockReadGuard::map(self.node_ref.read(), |node| node.value())
    }

    fn downgrade(&self) -> Self::WeakRef {
        WeakNodeRef {
            node_ref: Arc::downgrade(&self.node_ref),
        }
    }

    fn upgrade(weak: &Self::WeakRef) -> Option<Self> {
        weak.node_ref.upgrade().map(|node_ref| Self { node_ref })
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node_ref, &other.node_ref)
    }

    fn lock_links() -> Self::LinkGuard {
        LINKS.lock()
    }
}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> std::fmt::Display for NodeRef<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self, f)
    }
}

impl<T> std::fmt::Debug for NodeRef<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug_node(self, "NodeRef", f)
    }
}

impl<'a, T> IntoIterator for &'a NodeRef<T> {
    type Item = IterNode<NodeRef<T>>;
    type IntoIter = DepthFirstIter<NodeRef<T>>;

    fn into_iter(self) -> Self::IntoIter {
        DepthFirstIter::new(self.clone())
    }
}
