use std::fmt;

/// A header name in canonical form: the first letter and every letter after
/// a hyphen upper-cased, all other letters lower-cased.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CanonicalName(pub(crate) String);

impl CanonicalName {
    #[inline]
    pub fn new(name: &str) -> Self {
        Self(canonical_header_key(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for CanonicalName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl<'a> PartialEq<&'a str> for CanonicalName {
    #[inline]
    fn eq(&self, other: &&'a str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl<'a> PartialEq<&'a [u8]> for CanonicalName {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.0.as_bytes().eq_ignore_ascii_case(other)
    }
}

#[inline]
pub(crate) fn is_token_byte(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
        | b'^' | b'_' | b'`' | b'|' | b'~'
        | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}

/// Returns the canonical form of a header name.
///
/// `"content-type"` becomes `"Content-Type"`. A name holding any byte that
/// is not a token character is returned unchanged.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_owned();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
