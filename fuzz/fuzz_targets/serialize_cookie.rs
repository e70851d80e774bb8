#![no_main]
use libfuzzer_sys::fuzz_target;
use safehttp::{header::Header, Cookie};

fuzz_target!(|data: (&str, &str, &str, &str)| {
    let (name, value, path, domain) = data;
    let cookie = Cookie::new(name, value).with_path(path).with_domain(domain);

    let mut map = http::HeaderMap::new();
    let mut h = Header::new(&mut map);
    h.set_cookie(&cookie);
    assert!(h.values("Set-Cookie").len() <= 1);
});
