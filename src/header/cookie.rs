use crate::header::header_name::is_token_byte;
use std::{
    fmt::{self, Display, Formatter},
    net::Ipv4Addr,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::warn;

static SAME_SITE_NAME: [&str; 3] = ["Lax", "Strict", "None"];

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum SameSite {
    Lax = 0,
    Strict = 1,
    None = 2,
}

impl SameSite {
    #[inline]
    pub fn as_str(self) -> &'static str {
        SAME_SITE_NAME[self as usize]
    }
}

impl Display for SameSite {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An outbound cookie, serialized into a single `Set-Cookie` value.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
#[non_exhaustive]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
    pub expires: Option<SystemTime>,
    /// `Some(n)` with `n <= 0` asks the client to delete the cookie now.
    pub max_age: Option<i64>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
}

impl Cookie {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    #[inline]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    #[inline]
    pub fn with_expires(mut self, expires: SystemTime) -> Self {
        self.expires = Some(expires);
        self
    }

    #[inline]
    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age = Some(secs);
        self
    }

    #[inline]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[inline]
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    #[inline]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    #[inline]
    pub fn has_valid_name(&self) -> bool {
        !self.name.is_empty() && self.name.bytes().all(is_token_byte)
    }

    /// Returns the `Set-Cookie` value, or `None` if the name is not a token.
    pub fn serialize(&self) -> Option<String> {
        if !self.has_valid_name() {
            return None;
        }
        let mut out = String::with_capacity(self.name.len() + self.value.len() + 64);
        self.write_to(&mut out);
        Some(out)
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(&self.name);
        out.push('=');
        push_sanitized_value(out, &self.value);

        if !self.path.is_empty() {
            out.push_str("; Path=");
            out.extend(
                self.path
                    .chars()
                    .filter(|&c| c.is_ascii() && is_path_byte(c as u8)),
            );
        }

        if !self.domain.is_empty() {
            if is_valid_domain(&self.domain) {
                out.push_str("; Domain=");
                out.push_str(self.domain.strip_prefix('.').unwrap_or(&self.domain));
            } else {
                warn!(domain = %self.domain, "invalid cookie domain, dropping attribute");
            }
        }

        if let Some(expires) = self.expires {
            if expires >= UNIX_EPOCH {
                out.push_str("; Expires=");
                out.push_str(&httpdate::fmt_http_date(expires));
            } else {
                warn!(name = %self.name, "cookie expiry before epoch, dropping attribute");
            }
        }

        match self.max_age {
            Some(secs) if secs > 0 => {
                out.push_str("; Max-Age=");
                out.push_str(&secs.to_string());
            }
            Some(_) => out.push_str("; Max-Age=0"),
            None => (),
        }

        if self.http_only {
            out.push_str("; HttpOnly");
        }
        if self.secure {
            out.push_str("; Secure");
        }
        if let Some(same_site) = self.same_site {
            out.push_str("; SameSite=");
            out.push_str(same_site.as_str());
        }
    }
}

impl Display for Cookie {
    /// Writes nothing for a cookie with an invalid name.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.serialize() {
            Some(s) => f.write_str(&s),
            None => Ok(()),
        }
    }
}

#[inline]
fn is_value_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b'"' && b != b';' && b != b'\\'
}

#[inline]
fn is_path_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b';'
}

fn push_sanitized_value(out: &mut String, value: &str) {
    let quote = value.contains([' ', ',']);
    if quote {
        out.push('"');
    }
    out.extend(
        value
            .chars()
            .filter(|&c| c.is_ascii() && is_value_byte(c as u8)),
    );
    if quote {
        out.push('"');
    }
}

fn is_valid_domain(domain: &str) -> bool {
    is_domain_name(domain) || domain.parse::<Ipv4Addr>().is_ok()
}

fn is_domain_name(s: &str) -> bool {
    if s.is_empty() || s.len() > 255 {
        return false;
    }
    let s = s.strip_prefix('.').unwrap_or(s);

    let mut last = b'.';
    let mut seen_letter = false;
    let mut part_len = 0;

    for c in s.bytes() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                seen_letter = true;
                part_len += 1;
            }
            b'0'..=b'9' => part_len += 1,
            b'-' => {
                if last == b'.' {
                    return false;
                }
                part_len += 1;
            }
            b'.' => {
                if last == b'.' || last == b'-' || part_len == 0 || part_len > 63 {
                    return false;
                }
                part_len = 0;
            }
            _ => return false,
        }
        last = c;
    }

    last != b'-' && part_len <= 63 && seen_letter
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tracing_test::traced_test;

    #[test]
    fn test_serialize_minimal() {
        assert_eq!(Cookie::new("x", "y").serialize().as_deref(), Some("x=y"));
        assert_eq!(Cookie::new("x", "").serialize().as_deref(), Some("x="));
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "x=", "a;b", "a b", "a\tb", "a\r\n", "a,b", "ä", "a\"b"] {
            let c = Cookie::new(name, "y");
            assert!(!c.has_valid_name(), "name: {:?}", name);
            assert_eq!(c.serialize(), None, "name: {:?}", name);
            assert_eq!(c.to_string(), "");
        }
    }

    #[test]
    fn test_attributes_order() {
        let c = Cookie::new("sid", "abc")
            .with_path("/app")
            .with_domain(".example.com")
            .with_expires(UNIX_EPOCH + Duration::from_secs(784_111_777))
            .with_max_age(3600)
            .with_http_only(true)
            .with_secure(true)
            .with_same_site(SameSite::Strict);

        assert_eq!(
            c.to_string(),
            "sid=abc; Path=/app; Domain=example.com; \
             Expires=Sun, 06 Nov 1994 08:49:37 GMT; Max-Age=3600; \
             HttpOnly; Secure; SameSite=Strict"
        );
    }

    #[test]
    fn test_max_age() {
        let c = Cookie::new("a", "b").with_max_age(-1);
        assert_eq!(c.to_string(), "a=b; Max-Age=0");
        let c = Cookie::new("a", "b").with_max_age(0);
        assert_eq!(c.to_string(), "a=b; Max-Age=0");
    }

    #[test]
    fn test_same_site() {
        let c = Cookie::new("a", "b").with_same_site(SameSite::Lax);
        assert_eq!(c.to_string(), "a=b; SameSite=Lax");
        let c = Cookie::new("a", "b").with_same_site(SameSite::None);
        assert_eq!(c.to_string(), "a=b; SameSite=None");
    }

    #[test]
    fn test_value_sanitization() {
        let expectations = [
            ("plain", "plain"),
            ("a;b", "ab"),
            ("a\"b\\c", "abc"),
            ("line\r\nbreak", "linebreak"),
            ("with space", "\"with space\""),
            ("a,b", "\"a,b\""),
            ("żółw", ""),
        ];

        for (input, want) in expectations {
            let c = Cookie::new("n", input);
            assert_eq!(c.to_string(), format!("n={}", want), "input: {:?}", input);
        }
    }

    #[test]
    fn test_path_sanitization() {
        let c = Cookie::new("a", "b").with_path("/x;Domain=evil\r\n");
        assert_eq!(c.to_string(), "a=b; Path=/xDomain=evil");
    }

    #[test]
    #[traced_test]
    fn test_invalid_domain_dropped() {
        for domain in ["exa mple.com", "-a.com", "a..b", "a-.com", "::1", "123.456"] {
            let c = Cookie::new("a", "b").with_domain(domain);
            assert_eq!(c.to_string(), "a=b", "domain: {:?}", domain);
        }
        assert!(logs_contain("invalid cookie domain"));
    }

    #[test]
    fn test_valid_domains() {
        let c = Cookie::new("a", "b").with_domain("127.0.0.1");
        assert_eq!(c.to_string(), "a=b; Domain=127.0.0.1");
        let c = Cookie::new("a", "b").with_domain("sub_1.example.org");
        assert_eq!(c.to_string(), "a=b; Domain=sub_1.example.org");
    }

    #[test]
    #[traced_test]
    fn test_expires_before_epoch_dropped() {
        let c = Cookie::new("a", "b").with_expires(UNIX_EPOCH - Duration::from_secs(1));
        assert_eq!(c.to_string(), "a=b");
        assert!(logs_contain("cookie expiry before epoch"));
    }
}
