//! Parent/child relinking.
//!
//! Every structural change goes through this module, which updates the old
//! parent's children, the new parent's children and the child's parent link
//! in a single pass. Each entry point holds the backend's link guard for its
//! whole duration, so membership checks, the cycle check and the writes that
//! follow them can't interleave with another mutation. Node locks are taken
//! one at a time.

use colored::Colorize;
use tracing::{debug, trace};

use crate::{TreeError, TreeNodeRef};

/// Move `child` under `new_parent` (appended as its last child), or detach it
/// when `new_parent` is `None`.
///
/// Reassigning the current parent does nothing.
///
/// # Errors
///
/// [`TreeError::Cycle`] when `new_parent` is `child` itself or one of its
/// descendants. The tree is left unchanged.
pub fn reparent<R>(child: &R, new_parent: Option<&R>) -> Result<(), TreeError>
where
    R: TreeNodeRef,
{
    let _links = R::lock_links();
    relink(child, new_parent)
}

pub(crate) fn add_child<R>(parent: &R, child: &R) -> Result<(), TreeError>
where
    R: TreeNodeRef,
{
    let _links = R::lock_links();

    if parent.has_child(child) {
        trace!("Node {} is already a child of {}", child.id(), parent.id());
        return Ok(());
    }
    relink(child, Some(parent))
}

pub(crate) fn remove_child<R>(parent: &R, child: &R)
where
    R: TreeNodeRef,
{
    let _links = R::lock_links();

    if parent.has_child(child) {
        unlink(child, Some(parent));
        debug!(
            "{} node {} from {}",
            "Detach".bright_purple(),
            child.id(),
            parent.id()
        );
    } else {
        trace!("Node {} is not a child of {}", child.id(), parent.id());
    }
}

/// Clear the parent link of `child` and remove it from its parent's children
pub(crate) fn detach<R>(child: &R)
where
    R: TreeNodeRef,
{
    let _links = R::lock_links();

    let old_parent = child.parent();
    unlink(child, old_parent.as_ref());

    if let Some(parent) = old_parent {
        debug!(
            "{} node {} from {}",
            "Detach".bright_purple(),
            child.id(),
            parent.id()
        );
    }
}

fn relink<R>(child: &R, new_parent: Option<&R>) -> Result<(), TreeError>
where
    R: TreeNodeRef,
{
    let old_parent = child.parent();

    let unchanged = match (old_parent.as_ref(), new_parent) {
        (None, None) => true,
        (Some(old), Some(new)) => old.ptr_eq(new),
        _ => false,
    };

    if unchanged {
        trace!("Node {} already has the requested parent", child.id());
        return Ok(());
    }

    if let Some(parent) = new_parent {
        if parent.ptr_eq(child) || child.is_ancestor_of(parent) {
            debug!(
                "Rejected reparent of node {} onto {}: would introduce a cycle",
                child.id(),
                parent.id()
            );
            return Err(TreeError::Cycle {
                node: child.id(),
                parent: parent.id(),
            });
        }
    }

    unlink(child, old_parent.as_ref());

    if let Some(parent) = new_parent {
        attach(child, parent);
    }

    debug!(
        "{} node {} from {:?} to {:?}",
        "Reparent".bright_purple(),
        child.id(),
        old_parent.map(|p| p.id()),
        new_parent.map(|p| p.id())
    );

    Ok(())
}

fn unlink<R>(child: &R, old_parent: Option<&R>)
where
    R: TreeNodeRef,
{
    child.node_mut().set_parent_link(None);

    if let Some(parent) = old_parent {
        parent
            .node_mut()
            .children_mut()
            .retain(|sibling| !sibling.ptr_eq(child));
    }
}

fn attach<R>(child: &R, parent: &R)
where
    R: TreeNodeRef,
{
    child.node_mut().set_parent_link(Some(parent.downgrade()));

    let mut node = parent.node_mut();
    if !node.children().iter().any(|sibling| sibling.ptr_eq(child)) {
        node.children_mut().push(child.clone());
    }
}
