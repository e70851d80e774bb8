#![no_main]
use libfuzzer_sys::fuzz_target;
use safehttp::header::canonical_header_key;

fuzz_target!(|data: &str| {
    let once = canonical_header_key(data);
    assert_eq!(canonical_header_key(&once), once);
});
