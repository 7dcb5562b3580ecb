#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate huffcodec;
use huffcodec::round_trip;

fuzz_target!(|data: &[u8]| {
    round_trip(data);
});
