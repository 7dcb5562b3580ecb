#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate huffcodec;

// First line is the text the tree is built from, the rest is fed to the decoder as bits
fuzz_target!(|data: &str| {
    let (text, bits) = data.split_once('\n').unwrap_or((data, ""));
    if let Ok(encoded) = huffcodec::compress(text) {
        if let Some(tree) = encoded.tree() {
            _ = huffcodec::decode(bits, tree);
        }
    }
});
