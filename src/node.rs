use tracing::debug;

use crate::NodeId;

/// Owning child handle stored in a node's children list
pub trait ChildHandle: Sized {
    /// Consume the handle. When it was the last strong handle the node is torn
    /// down and its children are returned, otherwise the result is empty.
    #[doc(hidden)]
    fn into_children(self) -> Vec<Self>;
}

/// The record behind every node handle.
///
/// `P` is the non-owning parent link and `C` the owning child handle of the
/// backend in use. Structural fields can only be changed from inside the crate,
/// so links are always updated through the crate-private `link` module.
pub struct Node<T, P, C: ChildHandle> {
    id: NodeId,
    value: T,
    parent: Option<P>,
    children: Vec<C>,
}

impl<T, P, C: ChildHandle> Node<T, P, C> {
    pub(crate) fn new(value: T) -> Self {
        let id = NodeId::next();
        debug!("Created Node ID {}", id);

        Self {
            id,
            value,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Child handles in insertion order
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Return the number of child nodes for this node
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn parent_link(&self) -> Option<&P> {
        self.parent.as_ref()
    }

    pub(crate) fn set_parent_link(&mut self, parent: Option<P>) -> Option<P> {
        std::mem::replace(&mut self.parent, parent)
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<C> {
        &mut self.children
    }
}

// Release descendants from an explicit stack. The default drop glue recurses
// once per level and overflows the stack on deep chains.
impl<T, P, C: ChildHandle> Drop for Node<T, P, C> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(child) = stack.pop() {
            stack.extend(child.into_children());
        }
    }
}
