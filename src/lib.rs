//! # Linden
//!
//! Multi-way tree nodes for Rust.
//!
//! ## Overview
//!
//! Every node holds a value, an ordered list of children and a link back to
//! its parent. Structural changes go through a single relinking step, so a
//! node is listed as a child of exactly the node it names as its parent.
//! Subtrees can be searched depth first (pre-order) or breadth first
//! (level-order).
//!
//! Two node handle backends are provided: [`noderef::rc::NodeRef`] for single
//! threaded use and [`noderef::arc::NodeRef`], which can be shared across
//! threads.
//!
//! ```
//! use linden::{RcNode, TreeNodeRef};
//!
//! let root = RcNode::new("r");
//! let a = RcNode::new("a");
//! let b = RcNode::new("b");
//! root.add_child(&a)?;
//! b.set_parent(Some(&root))?;
//!
//! assert!(a.parent().unwrap().ptr_eq(&root));
//! assert!(root.breadth_search(&"b").unwrap().ptr_eq(&b));
//!
//! // A node can't become a child of its own descendant
//! assert!(root.set_parent(Some(&a)).is_err());
//! # Ok::<(), linden::TreeError>(())
//! ```

mod display;
mod error;
mod id;
mod iterator;
mod link;

pub mod node;
pub mod noderef;

#[cfg(test)]
mod test;

pub use display::TreeDisplay;
pub use error::TreeError;
pub use id::NodeId;
pub use iterator::{BreadthFirstIter, DepthFirstIter, IterNode};
pub use link::reparent;

pub use node::Node;
pub use noderef::TreeNodeRef;

pub type RcNode<T> = noderef::rc::NodeRef<T>;
pub type ArcNode<T> = noderef::arc::NodeRef<T>;
