#![cfg(test)]
//! Properties checked across the whole pipeline on seeded random texts.

use alloc::string::String;
use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

mod fuzz_regressions;

/// Random text over the first `alphabet` symbols, skewed towards low symbols
/// when `skewed` is set so that code lengths actually differ.
fn random_text(rng: &mut SmallRng, len: usize, alphabet: u32, skewed: bool) -> String {
    (0..len)
        .map(|_| {
            let code = if skewed {
                let a = rng.gen_range(0..alphabet);
                let b = rng.gen_range(0..alphabet);
                a.min(b)
            } else {
                rng.gen_range(0..alphabet)
            };
            char::from(code as u8)
        })
        .collect()
}

fn corpus() -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
    let mut texts = Vec::new();
    for alphabet in [1, 2, 3, 7, 26, 100, 256] {
        for len in [1, 2, 17, 500, 4000] {
            texts.push(random_text(&mut rng, len, alphabet, false));
            texts.push(random_text(&mut rng, len, alphabet, true));
        }
    }
    texts.push(String::from("the quick brown fox jumps over the lazy dog\n"));
    texts.push(String::from("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaab"));
    texts
}

#[test]
fn round_trip_random_texts() {
    use crate::{compress, decompress};

    for text in corpus() {
        let encoded = compress(&text).unwrap();
        assert_eq!(decompress(&encoded).unwrap(), text);
    }
}

#[test]
fn codes_are_prefix_free() {
    use crate::compress;

    for text in corpus() {
        let encoded = compress(&text).unwrap();
        let table = encoded.tree().unwrap().code_table();
        let codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(*a), "{a} is a prefix of {b}");
                }
            }
        }
    }
}

#[test]
fn frequent_symbols_get_shorter_codes() {
    use crate::FrequencyTable;

    for text in corpus() {
        let frequencies = FrequencyTable::from_text(&text).unwrap();
        let table = crate::compress(&text)
            .unwrap()
            .tree()
            .unwrap()
            .code_table();
        for (x, count_x) in frequencies.iter() {
            for (y, count_y) in frequencies.iter() {
                if count_x > count_y {
                    let len_x = table.get(x).unwrap().len();
                    let len_y = table.get(y).unwrap().len();
                    assert!(
                        len_x <= len_y,
                        "{x} (count {count_x}) got {len_x} bits but {y} (count {count_y}) got {len_y}"
                    );
                }
            }
        }
    }
}

#[test]
fn weights_match_children() {
    use crate::{FrequencyTable, HuffmanTree, Node};

    fn check(node: &Node) -> usize {
        match node {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal {
                weight,
                left,
                right,
            } => {
                assert_eq!(*weight, check(left) + check(right));
                *weight
            }
        }
    }

    for text in corpus() {
        let frequencies = FrequencyTable::from_text(&text).unwrap();
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let filler = usize::from(frequencies.distinct() == 1);
        assert_eq!(check(tree.root()), frequencies.total() + filler);
    }
}

#[test]
fn encoded_length_is_weighted_code_length() {
    use crate::{compress, FrequencyTable};

    for text in corpus() {
        let frequencies = FrequencyTable::from_text(&text).unwrap();
        let encoded = compress(&text).unwrap();
        let table = encoded.tree().unwrap().code_table();
        let expected: usize = frequencies
            .iter()
            .map(|(symbol, count)| count * table.get(symbol).unwrap().len())
            .sum();
        assert_eq!(encoded.bit_len(), expected);
    }
}

#[test]
fn shared_tree_decodes_concurrently() {
    extern crate std;
    use crate::{compress, decode};

    let text = "she sells sea shells by the sea shore";
    let encoded = compress(text).unwrap();
    let tree = encoded.tree().unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(decode(encoded.bits(), tree).unwrap(), text));
        }
    });
}
