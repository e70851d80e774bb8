use crate::header::CanonicalName;

pub const SET_COOKIE: &str = "Set-Cookie";

/// Header names the public mutation API never writes.
pub static RESTRICTED_HEADERS: [&str; 1] = [SET_COOKIE];

#[inline]
pub fn is_restricted(name: &CanonicalName) -> bool {
    RESTRICTED_HEADERS.iter().any(|r| name.as_str() == *r)
}
