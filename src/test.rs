use crate::{noderef::rc::NodeRef, TreeNodeRef};

/// The four node tree used across the tests:
///
/// ```text
/// r
/// ├ a
/// │ └ x
/// └ b
/// ```
pub struct SampleTree<R> {
    pub r: R,
    pub a: R,
    pub b: R,
    pub x: R,
}

impl<R> SampleTree<R>
where
    R: TreeNodeRef<Data = &'static str>,
{
    pub fn new() -> Self {
        let r = R::new("r");
        let a = R::new("a");
        let b = R::new("b");
        let x = R::new("x");

        r.add_child(&a).unwrap();
        r.add_child(&b).unwrap();
        a.add_child(&x).unwrap();

        Self { r, a, b, x }
    }

    pub fn nodes(&self) -> [R; 4] {
        [
            self.r.clone(),
            self.a.clone(),
            self.b.clone(),
            self.x.clone(),
        ]
    }

    /// Check the tree still has exactly the shape built by `new`
    pub fn assert_shape(&self) {
        assert!(self.r.is_root());
        assert_eq!(self.r.num_children(), 2);
        assert!(self.r.children()[0].ptr_eq(&self.a));
        assert!(self.r.children()[1].ptr_eq(&self.b));
        assert_eq!(self.a.num_children(), 1);
        assert!(self.a.children()[0].ptr_eq(&self.x));
        assert!(self.b.is_leaf());
        assert!(self.x.is_leaf());
        self.assert_consistent();
    }

    pub fn assert_consistent(&self) {
        assert_consistent(&self.nodes());
    }
}

/// Assert the single-parent and bidirectional link invariants over a set of nodes
pub fn assert_consistent<R>(nodes: &[R])
where
    R: TreeNodeRef,
{
    for child in nodes {
        let listed_by: Vec<&R> = nodes.iter().filter(|p| p.has_child(child)).collect();
        assert!(
            listed_by.len() <= 1,
            "node {} is listed as a child of {} nodes",
            child.id(),
            listed_by.len()
        );

        for parent in nodes {
            let is_parent = child
                .parent()
                .map(|p| p.ptr_eq(parent))
                .unwrap_or(false);
            assert_eq!(
                is_parent,
                parent.has_child(child),
                "links of parent {} and child {} disagree",
                parent.id(),
                child.id()
            );
        }
    }

    for node in nodes {
        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            assert!(
                !children[i + 1..].iter().any(|other| other.ptr_eq(child)),
                "node {} lists child {} twice",
                node.id(),
                child.id()
            );
        }
    }
}

/// Construct a tree from a Vec of tuples of (&str, Vec of children) below a "root" node
pub fn test_tree(data: Vec<(&'static str, Vec<&'static str>)>) -> NodeRef<&'static str> {
    let root = NodeRef::new("root");

    for (value, children) in data {
        let node = NodeRef::new(value);
        root.add_child(&node).unwrap();

        for child in children {
            node.add_child(&NodeRef::new(child)).unwrap();
        }
    }

    println!("{}", root);

    root
}
