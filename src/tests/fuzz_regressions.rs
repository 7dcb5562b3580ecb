extern crate std;

use std::fs;

/// Replay every crashing input cargo-fuzz has saved, if there are any.
fn artifacts(target: &str) -> impl Iterator<Item = std::vec::Vec<u8>> {
    let dir = std::format!("./fuzz/artifacts/{target}");
    fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| fs::read(entry.path()).ok())
}

#[test]
fn round_trip_artifacts() {
    for data in artifacts("round_trip") {
        crate::codec::round_trip(&data);
    }
}

#[test]
fn decode_artifacts() {
    for data in artifacts("decode") {
        let Ok(data) = std::str::from_utf8(&data) else {
            continue;
        };
        let (text, bits) = data.split_once('\n').unwrap_or((data, ""));
        if let Ok(encoded) = crate::compress(text) {
            if let Some(tree) = encoded.tree() {
                // errors are fine, it just must not panic
                _ = crate::decode(bits, tree);
            }
        }
    }
}
