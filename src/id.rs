use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64Generator = AtomicU64Generator::new();

/// Unique identifier assigned to every node when it is created
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate the next process-wide unique id
    pub(crate) fn next() -> Self {
        NodeId(NEXT_ID.generate())
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Default, Debug)]
struct AtomicU64Generator {
    next_id: AtomicU64,
}

impl AtomicU64Generator {
    const fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
        }
    }

    fn generate(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}
