use std::{collections::VecDeque, iter::FusedIterator, ops::Deref};

use crate::TreeNodeRef;

/// A node yielded by the subtree iterators, along with its depth relative to
/// the node the iteration started from
#[derive(Debug, Clone)]
pub struct IterNode<R> {
    depth: usize,
    node: R,
}

impl<R> IterNode<R> {
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn into_node(self) -> R {
        self.node
    }
}

impl<R> Deref for IterNode<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

/// Pre-order iterator: a node is yielded before its children, children left to right
pub struct DepthFirstIter<R> {
    stack: VecDeque<(usize, R)>,
}

impl<R> DepthFirstIter<R>
where
    R: TreeNodeRef,
{
    pub fn new(node: R) -> Self {
        Self {
            stack: VecDeque::from([(0, node)]),
        }
    }
}

impl<R> Iterator for DepthFirstIter<R>
where
    R: TreeNodeRef,
{
    type Item = IterNode<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop_front()?;

        // Push children in reverse so the first child is popped next
        node.node()
            .children()
            .iter()
            .rev()
            .for_each(|child| self.stack.push_front((depth + 1, child.clone())));

        Some(IterNode { depth, node })
    }
}

impl<R> FusedIterator for DepthFirstIter<R> where R: TreeNodeRef {}

/// Level-order iterator driven by a FIFO queue
pub struct BreadthFirstIter<R> {
    queue: VecDeque<(usize, R)>,
}

impl<R> BreadthFirstIter<R>
where
    R: TreeNodeRef,
{
    pub fn new(node: R) -> Self {
        Self {
            queue: VecDeque::from([(0, node)]),
        }
    }
}

impl<R> Iterator for BreadthFirstIter<R>
where
    R: TreeNodeRef,
{
    type Item = IterNode<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.queue.pop_front()?;

        self.queue.extend(
            node.node()
                .children()
                .iter()
                .map(|child| (depth + 1, child.clone())),
        );

        Some(IterNode { depth, node })
    }
}

impl<R> FusedIterator for BreadthFirstIter<R> where R: TreeNodeRef {}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use crate::noderef::rc::NodeRef;
    use crate::test::{test_tree, SampleTree};
    use crate::TreeNodeRef;

    #[traced_test]
    #[test]
    fn depth_first_order_and_depths() {
        let tree = SampleTree::<NodeRef<&'static str>>::new();

        let visited: Vec<(usize, &str)> = tree
            .r
            .iter()
            .map(|item| (item.depth(), *item.value()))
            .collect();

        assert_eq!(visited, [(0, "r"), (1, "a"), (2, "x"), (1, "b")]);
    }

    #[traced_test]
    #[test]
    fn breadth_first_order_and_depths() {
        let tree = SampleTree::<NodeRef<&'static str>>::new();

        let visited: Vec<(usize, &str)> = tree
            .r
            .iter_breadth()
            .map(|item| (item.depth(), *item.value()))
            .collect();

        assert_eq!(visited, [(0, "r"), (1, "a"), (1, "b"), (2, "x")]);
    }

    #[traced_test]
    #[test]
    fn depth_is_relative_to_start() {
        let tree = SampleTree::<NodeRef<&'static str>>::new();

        let depths: Vec<usize> = tree.a.iter().map(|item| item.depth()).collect();
        assert_eq!(depths, [0, 1]);
    }

    #[traced_test]
    #[test]
    fn wider_tree_orders() {
        let root = test_tree(vec![("a", vec!["a1", "a2"]), ("b", vec![]), ("c", vec!["c1"])]);

        let pre: Vec<&str> = root.iter().map(|item| *item.value()).collect();
        assert_eq!(pre, ["root", "a", "a1", "a2", "b", "c", "c1"]);

        let level: Vec<&str> = root.iter_breadth().map(|item| *item.value()).collect();
        assert_eq!(level, ["root", "a", "b", "c", "a1", "a2", "c1"]);
    }

    #[test]
    fn single_node_yields_itself_once() {
        let node = NodeRef::new("only");

        let mut iter = node.iter();
        assert!(iter.next().unwrap().ptr_eq(&node));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());

        assert_eq!(node.iter_breadth().count(), 1);
    }
}
