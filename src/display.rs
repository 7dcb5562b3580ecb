//! ASCII drawing of a Huffman tree.
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! so reading the drawing top to bottom walks the codes from `1...` to `0...`.
//!
//! ```text
//! │   ┌── <a: 3>
//! └── <#: 4>
//!     └── <b: 1>
//! ```
//!
//! Internal nodes are labelled `#`. Leaves always show their real symbol, so
//! the filler leaf of a single symbol tree shows up as `\x00` (or `\x01`),
//! not as `#`. Only the node kind decides whether `#` is drawn.

use crate::tree::{HuffmanTree, Node};
use alloc::string::String;
use core::fmt;

/// Draws the tree as described in the [module docs](self); internal nodes
/// print as `#`, filler leaves print with their own symbol.
impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw(f, self.root(), &mut String::new(), true)
    }
}

fn draw(
    f: &mut fmt::Formatter<'_>,
    node: &Node,
    prefix: &mut String,
    is_tail: bool,
) -> fmt::Result {
    let depth = prefix.len();

    if let Some(right) = node.right() {
        prefix.push_str(if is_tail { "│   " } else { "    " });
        draw(f, right, prefix, false)?;
        prefix.truncate(depth);
    }

    f.write_str(prefix)?;
    f.write_str(if is_tail { "└── " } else { "┌── " })?;
    match node.symbol() {
        Some(symbol) => writeln!(f, "<{}: {}>", SymbolLabel(symbol), node.weight())?,
        None => writeln!(f, "<#: {}>", node.weight())?,
    }

    if let Some(left) = node.left() {
        prefix.push_str(if is_tail { "    " } else { "│   " });
        draw(f, left, prefix, true)?;
        prefix.truncate(depth);
    }

    Ok(())
}

/// Printable form of a symbol: `\n` for newlines, `\xNN` for other control
/// characters, the character itself otherwise.
pub struct SymbolLabel(pub u8);

impl fmt::Display for SymbolLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let character = char::from(self.0);
        match character {
            '\n' => f.write_str("\\n"),
            c if c.is_control() => write!(f, "\\x{:02x}", self.0),
            c => write!(f, "{}", c),
        }
    }
}
