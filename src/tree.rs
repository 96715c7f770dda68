use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use bitvec::prelude::*;

/// Route from the root of a tree down to one of its leaves, one bit per edge.
///
/// A `0` bit descends into the left child and a `1` bit into the right one.
pub type Path = BitVec;

const LEFT: bool = false;
const RIGHT: bool = true;

/// A node of a Huffman tree.
///
/// Leaves carry an input symbol and its count. Internal nodes are merge
/// points: they have no symbol and always own exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub(crate) fn merge(left: Node<S>, right: Node<S>) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Occurrence count for a leaf, sum of the children's weights otherwise.
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for an internal node.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&Node<S>> {
        self.children().map(|(l, _)| l)
    }

    pub fn right(&self) -> Option<&Node<S>> {
        self.children().map(|(_, r)| r)
    }

    /// Both children of an internal node, `None` for a leaf.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }
}

/// Leaves render as `symbol:weight`, internal nodes as `*(weight)`.
///
/// ```
/// use huffman_tree::Node;
///
/// let leaf = Node::Leaf { symbol: 'a', weight: 3 };
/// assert_eq!(leaf.to_string(), "a:3");
/// ```
impl<S: fmt::Display> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { symbol, weight } => write!(f, "{}:{}", symbol, weight),
            Node::Internal { weight, .. } => write!(f, "*({})", weight),
        }
    }
}

/// A completed Huffman tree.
///
/// Two trees compare equal when they have the same shape, the same leaf
/// placement and the same weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<S> {
    root: Node<S>,
}

impl<S> Tree<S> {
    pub(crate) fn new(root: Node<S>) -> Self {
        Tree { root }
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Total weight, equal to the sum of all input counts.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Number of edges on the longest root-to-leaf path. A tree made of a
    /// single leaf has height 0.
    pub fn height(&self) -> usize {
        self.level_order()
            .last()
            .map(|&(depth, _)| depth)
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        // A full binary tree with n leaves has n - 1 internal nodes.
        2 * self.leaf_count() - 1
    }

    pub fn leaf_count(&self) -> usize {
        fn walk<S>(node: &Node<S>) -> usize {
            match node.children() {
                None => 1,
                Some((left, right)) => walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }

    /// Leaves from left to right.
    pub fn leaves(&self) -> Vec<&Node<S>> {
        self.in_order().into_iter().filter(|n| n.is_leaf()).collect()
    }

    /// Every node in in-order sequence: left subtree, node, right subtree.
    /// A node's index in this sequence is its column when the tree is laid
    /// out with one node per column.
    pub fn in_order(&self) -> Vec<&Node<S>> {
        fn walk<'a, S>(node: &'a Node<S>, out: &mut Vec<&'a Node<S>>) {
            match node.children() {
                None => out.push(node),
                Some((left, right)) => {
                    walk(left, out);
                    out.push(node);
                    walk(right, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    /// Every node paired with its depth, breadth first, left before right.
    pub fn level_order(&self) -> Vec<(usize, &Node<S>)> {
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((0, &self.root));
        while let Some((depth, node)) = queue.pop_front() {
            if let Some((left, right)) = node.children() {
                queue.push_back((depth + 1, left));
                queue.push_back((depth + 1, right));
            }
            out.push((depth, node));
        }
        out
    }

    /// Weighted path length: the sum of `weight * depth` over all leaves, or
    /// `None` if it does not fit in a `usize`.
    ///
    /// Any two Huffman trees built from the same frequencies have the same
    /// cost, whatever the tie-break.
    pub fn cost(&self) -> Option<usize> {
        self.level_order()
            .into_iter()
            .filter(|(_, n)| n.is_leaf())
            .try_fold(0usize, |acc, (depth, n)| {
                depth.checked_mul(n.weight())?.checked_add(acc)
            })
    }
}

impl<S: PartialEq> Tree<S> {
    /// Route from the root to the leaf holding `symbol`, or `None` if no leaf
    /// does. The path to a root leaf is empty.
    ///
    /// ```
    /// use bitvec::prelude::*;
    ///
    /// let tree = huffman_tree::from_text("aaabb").unwrap();
    /// assert_eq!(tree.path(&'b'), Some(bitvec![0]));
    /// assert_eq!(tree.path(&'a'), Some(bitvec![1]));
    /// assert_eq!(tree.path(&'z'), None);
    /// ```
    pub fn path(&self, symbol: &S) -> Option<Path> {
        let mut prefix = Path::new();
        if descend(&self.root, symbol, &mut prefix) {
            Some(prefix)
        } else {
            None
        }
    }
}

impl<S: Clone + Eq + Hash> Tree<S> {
    /// Depth of every leaf, keyed by its symbol. The depth of a leaf is the
    /// length of its code.
    pub fn depths(&self) -> HashMap<S, usize> {
        self.level_order()
            .into_iter()
            .filter_map(|(depth, n)| n.symbol().map(|s| (s.clone(), depth)))
            .collect()
    }
}

// Depth-first search for `symbol`, recording the turns taken in `prefix`.
// On a miss the prefix is restored to what it was on entry.
fn descend<S: PartialEq>(node: &Node<S>, symbol: &S, prefix: &mut Path) -> bool {
    match node {
        Node::Leaf { symbol: s, .. } => s == symbol,
        Node::Internal { left, right, .. } => {
            for &(child, bit) in [(&**left, LEFT), (&**right, RIGHT)].iter() {
                prefix.push(bit);
                if descend(child, symbol, prefix) {
                    return true;
                }
                prefix.pop();
            }
            false
        }
    }
}
