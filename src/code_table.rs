//! Symbol to bit-path lookup, derived from a Huffman tree.

use crate::tree::Node;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Maps every leaf symbol of a tree to the path leading to it,
/// `'0'` for each left turn and `'1'` for each right turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, String>,
}

impl CodeTable {
    /// Walk the tree depth first and record the path of every leaf.
    ///
    /// A root that is itself a leaf has no turns to take, its symbol maps to
    /// the empty path. [`HuffmanTree`](crate::HuffmanTree) never produces such a root
    /// and [`encode`](crate::encode) refuses empty codes.
    pub fn build(root: &Node) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut stack: Vec<(&Node, String)> = Vec::new();
        stack.push((root, String::new()));

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.codes.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }
}
