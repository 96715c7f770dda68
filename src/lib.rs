//! # Huffman tree
//!
//! `huffman-tree` is a crate to build the prefix-code tree of the
//! [Huffman coding](https://en.wikipedia.org/wiki/Huffman_coding) algorithm
//! from the symbol frequencies of an input.
//!
//! Construction is deterministic: ties between nodes of equal weight are
//! broken by a declared [`TieBreak`] rule, so building twice from the same
//! frequencies always yields structurally identical trees.
//!
//! ```
//! let freq = huffman_tree::count_chars("aaabb");
//! let tree = huffman_tree::build(&freq).unwrap();
//!
//! assert_eq!(tree.weight(), 5);
//! assert_eq!(tree.leaf_count(), 2);
//! ```
//!
//! ## References
//!
//! * _Huffman, D.A., 1952. A method for the construction of minimum-redundancy codes. Proceedings of the IRE, 40(9), pp.1098-1101._
//! * _Schwartz, E.S., 1964. An optimum encoding with minimum longest code and total number of digits. Information and Control, 7(1), pp.37-44._

mod error;
mod frequency;
mod tree;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

pub use crate::error::{Error, Result};
pub use crate::frequency::{count, count_chars, count_graphemes, total, FrequencyMap};
pub use crate::tree::{Node, Path, Tree};

/// Order in which nodes of equal weight leave the priority queue.
///
/// Whatever the policy, lower weight always leaves first, and the first node
/// taken out in a merge step becomes the left child of the new node.
///
/// The initial leaves enter the queue sorted by `(weight, symbol)`, so the
/// policy never depends on the iteration order of the frequency map. Merged
/// nodes enter in the order they are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The node that entered the queue first leaves first. Leaves therefore
    /// win over merged nodes of the same weight, which keeps the longest code
    /// as short as possible.
    #[default]
    Fifo,
    /// The node that entered the queue last leaves first.
    Lifo,
}

/// Configurable tree builder.
///
/// ```
/// use huffman_tree::{Builder, TieBreak};
///
/// let freq = huffman_tree::count_chars("abccdd");
/// let fifo = Builder::default().build(&freq).unwrap();
/// let lifo = Builder::default().tie_break(TieBreak::Lifo).build(&freq).unwrap();
///
/// assert_ne!(fifo, lifo);
/// assert_eq!(fifo.cost(), lifo.cost());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    tie_break: TieBreak,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builds the Huffman tree of `freq`.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyInput`] if `freq` has no entries.
    /// * [`Error::InvalidFrequency`] if some count is zero.
    /// * [`Error::WeightOverflow`] if the counts add up past `usize::MAX`.
    pub fn build<S: Ord + Clone>(&self, freq: &FrequencyMap<S>) -> Result<Tree<S>> {
        let total = validate(freq)?;
        debug!(
            "building tree from {} symbols of total weight {} ({:?})",
            freq.len(),
            total,
            self.tie_break
        );

        let mut leaves = freq.iter().collect::<Vec<(&S, &usize)>>();
        leaves.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

        let mut heap = BinaryHeap::with_capacity(leaves.len());
        let mut seq = 0;
        for (symbol, &weight) in leaves {
            heap.push(Entry::new(
                Node::Leaf {
                    symbol: symbol.clone(),
                    weight,
                },
                seq,
                self.tie_break,
            ));
            seq += 1;
        }

        // The forward step of Huffman's algorithm: the two lightest nodes are
        // combined into one whose weight is the sum of theirs, until a single
        // node holds the whole hierarchy.
        while let Some(first) = heap.pop() {
            let second = match heap.pop() {
                Some(entry) => entry,
                None => {
                    debug!("tree complete, root weight {}", first.weight);
                    return Ok(Tree::new(first.node));
                }
            };
            trace!("merging {} + {}", first.weight, second.weight);
            heap.push(Entry::new(
                Node::merge(first.node, second.node),
                seq,
                self.tie_break,
            ));
            seq += 1;
        }
        Err(Error::EmptyInput)
    }
}

/// Builds the Huffman tree of `freq` with the default [`TieBreak`].
///
/// # Examples
///
/// ```
/// use huffman_tree::*;
///
/// let tree = build(&count_chars("a")).unwrap();
/// assert!(tree.root().is_leaf());
/// assert_eq!(tree.root().symbol(), Some(&'a'));
///
/// assert_eq!(build(&FrequencyMap::<char>::new()), Err(Error::EmptyInput));
/// ```
pub fn build<S: Ord + Clone>(freq: &FrequencyMap<S>) -> Result<Tree<S>> {
    Builder::default().build(freq)
}

/// Counts the characters of `text` and builds their Huffman tree.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `text` is empty.
pub fn from_text(text: &str) -> Result<Tree<char>> {
    build(&count_chars(text))
}

// Rejects maps no tree can be built from and returns the root weight.
fn validate<S>(freq: &FrequencyMap<S>) -> Result<usize> {
    if freq.is_empty() {
        return Err(Error::EmptyInput);
    }
    freq.values().try_fold(0usize, |acc, &count| {
        if count == 0 {
            return Err(Error::InvalidFrequency { count });
        }
        acc.checked_add(count).ok_or(Error::WeightOverflow)
    })
}

// A queued node together with its position in the tie-break order.
struct Entry<S> {
    node: Node<S>,
    weight: usize,
    rank: u64,
}

impl<S> Entry<S> {
    fn new(node: Node<S>, seq: u64, tie_break: TieBreak) -> Self {
        let rank = match tie_break {
            TieBreak::Fifo => seq,
            TieBreak::Lifo => u64::MAX - seq,
        };
        Entry {
            weight: node.weight(),
            node,
            rank,
        }
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // We flip the order of the arguments as BinaryHeap pops the greatest
        // entry and we want the lightest, lowest ranked one.
        (other.weight, other.rank).cmp(&(self.weight, self.rank))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Entry<S> {}

#[cfg(test)]
mod tests {
    use crate::*;

    fn init() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::max())
            .is_test(true)
            .try_init();
    }

    fn leaf(symbol: char, weight: usize) -> Node<char> {
        Node::Leaf { symbol, weight }
    }

    fn internal(left: Node<char>, right: Node<char>) -> Node<char> {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn freq(pairs: &[(char, usize)]) -> FrequencyMap<char> {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn entry() {
        let a = Entry::new(leaf('a', 3), 0, TieBreak::Fifo);
        let b = Entry::new(leaf('b', 3), 1, TieBreak::Fifo);
        let c = Entry::new(leaf('c', 2), 2, TieBreak::Fifo);
        // Greater entries leave the heap first.
        assert!(a > b);
        assert!(c > a);

        let a = Entry::new(leaf('a', 3), 0, TieBreak::Lifo);
        let b = Entry::new(leaf('b', 3), 1, TieBreak::Lifo);
        let c = Entry::new(leaf('c', 4), 2, TieBreak::Lifo);
        assert!(b > a);
        assert!(a > c);
    }

    #[test]
    fn validate() {
        assert_eq!(crate::validate(&freq(&[])), Err(Error::EmptyInput));
        assert_eq!(
            crate::validate(&freq(&[('a', 2), ('b', 0)])),
            Err(Error::InvalidFrequency { count: 0 })
        );
        assert_eq!(
            crate::validate(&freq(&[('a', usize::MAX), ('b', 1)])),
            Err(Error::WeightOverflow)
        );
        assert_eq!(crate::validate(&freq(&[('a', 2), ('b', 5)])), Ok(7));
    }

    #[test]
    fn build_single() {
        init();
        assert_eq!(
            crate::build(&freq(&[('a', 5)])).unwrap().into_root(),
            leaf('a', 5)
        );
    }

    #[test]
    fn build_fifo() {
        init();
        // a:3 b:1 c:1 -> (b c) a
        assert_eq!(
            crate::build(&freq(&[('a', 3), ('b', 1), ('c', 1)]))
                .unwrap()
                .into_root(),
            internal(internal(leaf('b', 1), leaf('c', 1)), leaf('a', 3))
        );
        // Leaves of weight 2 leave before the merged (a b) of weight 2.
        assert_eq!(
            crate::build(&freq(&[('a', 1), ('b', 1), ('c', 2), ('d', 2)]))
                .unwrap()
                .into_root(),
            internal(
                internal(leaf('a', 1), leaf('b', 1)),
                internal(leaf('c', 2), leaf('d', 2))
            )
        );
    }

    #[test]
    fn build_lifo() {
        init();
        let tree = Builder::new()
            .tie_break(TieBreak::Lifo)
            .build(&freq(&[('a', 1), ('b', 1), ('c', 2), ('d', 2)]))
            .unwrap();
        assert_eq!(
            tree.into_root(),
            internal(
                leaf('c', 2),
                internal(internal(leaf('b', 1), leaf('a', 1)), leaf('d', 2))
            )
        );
    }

    #[test]
    fn build_does_not_depend_on_map_order() {
        let text = "the quick brown fox jumps over the lazy dog";
        let expected = crate::from_text(text).unwrap();
        for _ in 0..16 {
            // Every fresh HashMap gets its own random iteration order.
            let f = count_chars(text).into_iter().collect::<FrequencyMap<char>>();
            assert_eq!(crate::build(&f).unwrap(), expected);
        }
    }

    #[test]
    fn build_graphemes() {
        let tree = crate::build(&count_graphemes("ضَضَa")).unwrap();
        assert_eq!(tree.weight(), 3);
        assert_eq!(tree.depths().get("ضَ"), Some(&1));
    }
}
