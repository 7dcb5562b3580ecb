//! Huffman tree construction.
//!
//! The tree is built bottom up with the classic greedy algorithm: keep every
//! subtree in a min-heap ordered by weight, repeatedly merge the two lightest
//! subtrees, stop when one is left.

use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use alloc::boxed::Box;
use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// A node of the Huffman tree.
///
/// Internal nodes own both of their children, so a node can never end up
/// with exactly one child.
///
/// The variants are open for pattern matching, but internal nodes should be
/// created with [`Node::merge`], which derives the weight from the children.
/// A hand written `Node::Internal` can carry any weight; use
/// [`Node::weights_consistent`] to check one. [`CodeTable::build`] only
/// follows the shape of the tree and ignores weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: u8, weight: usize) -> Node {
        Node::Leaf { symbol, weight }
    }

    /// Join two subtrees under a new parent carrying their combined weight
    pub fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether every internal node below and including `self` weighs exactly
    /// as much as its two children together.
    pub fn weights_consistent(&self) -> bool {
        let mut stack: Vec<&Node> = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                if *weight != left.weight() + right.weight() {
                    return false;
                }
                stack.push(right.as_ref());
                stack.push(left.as_ref());
            }
        }
        true
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Internal { left, .. } => Some(left.as_ref()),
            Node::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Internal { right, .. } => Some(right.as_ref()),
            Node::Leaf { .. } => None,
        }
    }
}

/// Heap slot. `sequence` is the insertion order and breaks ties between
/// equal weights so the same input always yields the same tree.
struct HeapEntry {
    weight: usize,
    sequence: usize,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // BinaryHeap is a max-heap, reverse so the lightest, oldest entry is on top
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A built Huffman tree. The root is always an internal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for the given frequencies.
    ///
    /// Returns `None` if no symbol has a positive count. If only one symbol
    /// occurs, a filler leaf of weight 1 is added so that every real symbol
    /// gets a code of at least one bit.
    pub fn build(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
        let mut heap = BinaryHeap::with_capacity(frequencies.distinct() + 1);
        let mut sequence = 0;
        let mut push = |heap: &mut BinaryHeap<HeapEntry>, node: Node| {
            heap.push(HeapEntry {
                weight: node.weight(),
                sequence,
                node,
            });
            sequence += 1;
        };

        for (symbol, count) in frequencies.iter() {
            push(&mut heap, Node::leaf(symbol, count));
        }

        if heap.len() == 1 {
            let only = heap.peek().and_then(|entry| entry.node.symbol());
            push(&mut heap, Node::leaf(filler_symbol(only), 1));
        }

        loop {
            let left = heap.pop()?;
            let Some(right) = heap.pop() else {
                return Some(HuffmanTree { root: left.node });
            };
            push(&mut heap, Node::merge(left.node, right.node));
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Symbol to bit-path mapping for every leaf of this tree
    pub fn code_table(&self) -> CodeTable {
        CodeTable::build(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = Vec::new();
        stack.push(&self.root);
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }
        count
    }

    /// Length of the longest root to leaf path, which is the longest code
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.push((&self.root, 0));
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        max
    }
}

/// Filler for single symbol inputs, never the same symbol as the real one
fn filler_symbol(only: Option<u8>) -> u8 {
    match only {
        Some(0) => 1,
        _ => 0,
    }
}
