use std::{
    cell::{Ref, RefCell, RefMut},
    rc::{Rc, Weak},
};

use crate::{
    display::TreeDisplay,
    iterator::{DepthFirstIter, IterNode},
    node::{ChildHandle, Node},
};

use super::{debug_node, internal, TreeNodeRef};

type Inner<T> = RefCell<Node<T, WeakNodeRef<T>, NodeRef<T>>>;

/// Single threaded node handle, `Rc<RefCell<Node>>`
pub struct NodeRef<T> {
    node_ref: Rc<Inner<T>>,
}

/// Non-owning parent link of an rc [`NodeRef`]
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
        Rc::into_inner(self.node_ref)
            .map(|node| std::mem::take(node.into_inner().children_mut()))
            .unwrap_or_default()
    }
}

impl<T> TreeNodeRef for NodeRef<T> {
    type Data = T;
    type WeakRef = WeakNodeRef<T>;
    type LinkGuard = ();
    type InnerRef<'b> = Ref<'b, Node<T, WeakNodeRef<T>, Self>> where Self: 'b;
    type InnerRefMut<'b> = RefMut<'b, Node<T, WeakNodeRef<T>, Self>> where Self: 'b;
    type DataRef<'b> = Ref<'b, T> where Self: 'b;

    fn new(value: T) -> Self {
        Self {
            node_ref: Rc::new(RefCell::new(Node::new(value))),
        }
    }

    fn node<'b>(&'b self) -> Self::InnerRef<'b> {
        self.node_ref.borrow()
    }

    fn node_mut<'b>(&'b self) -> Self::InnerRefMut<'b> {
        self.node_ref.borrow_mut()
    }

    fn value<'b>(&'b self) -> Self::DataRef<'b> {
        Ref::map(self.node_ref.borrow(), |node| node.value())
    }

    fn downgrade(&self) -> Self::WeakRef {
        WeakNodeRef {
            node_ref: Rc::downgrade(&self.node_ref),
        }
    }

    fn upgrade(weak: &Self::WeakRef) -> Option<Self> {
        weak.node_ref.upgrade().map(|node_ref| Self { node_ref })
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node_ref, &other.node_ref)
    }

    // A single thread can't interleave two mutations
    fn lock_links() -> Self::LinkGuard {}
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
        // Create an iterator starting with the root node in the stack
        DepthFirstIter::new(self.clone())
    }
}
