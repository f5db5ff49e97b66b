use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("attaching node {node} to {parent} would introduce a cycle")]
    Cycle { node: NodeId, parent: NodeId },
}
