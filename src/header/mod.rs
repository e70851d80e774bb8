//! Outbound response headers with write policies.
//!
//! [`Header`] wraps the transport's [`http::HeaderMap`] for the lifetime of a
//! response. Every name is canonicalized before lookup, names listed in
//! [`RESTRICTED_HEADERS`] can't be written through the public API, and names
//! marked immutable can't be written at all. Cookies reach `Set-Cookie` only
//! through [`Header::set_cookie`].

mod cookie;
mod header_name;
mod restricted;

pub use cookie::*;
pub use header_name::*;
pub use restricted::*;

use crate::{config::HeaderCfg, errors::HeaderError};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

#[derive(Debug)]
pub struct Header<'h> {
    map: &'h mut HeaderMap,
    immutable: HashSet<CanonicalName>,
}

impl<'h> Header<'h> {
    /// Wraps `map` as is; existing entries are not validated.
    #[inline]
    pub fn new(map: &'h mut HeaderMap) -> Self {
        Self {
            map,
            immutable: HashSet::new(),
        }
    }

    pub fn with_cfg(map: &'h mut HeaderMap, cfg: &HeaderCfg) -> Self {
        let mut h = Self::new(map);
        h.immutable.extend(cfg.frozen().iter().cloned());
        h
    }

    /// Returns the first value of `name`.
    ///
    /// Values that are not UTF-8 read as absent.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = CanonicalName::new(name);
        value_str(self.map.get(name.as_str())?)
    }

    /// Returns all values of `name` in insertion order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        let name = CanonicalName::new(name);
        self.map
            .get_all(name.as_str())
            .iter()
            .filter_map(value_str)
            .collect()
    }

    /// Replaces all values of `name` with `value`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let name = self.check_writable(name)?;
        let (key, value) = (header_name(&name)?, header_value(&name, value)?);
        trace!(name = %name, "set header");
        self.map.insert(key, value);
        Ok(())
    }

    /// Appends `value` to the values of `name`.
    pub fn add(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let name = self.check_writable(name)?;
        let (key, value) = (header_name(&name)?, header_value(&name, value)?);
        trace!(name = %name, "add header");
        self.map.append(key, value);
        Ok(())
    }

    /// Removes all values of `name`. Removing an absent header succeeds.
    pub fn del(&mut self, name: &str) -> Result<(), HeaderError> {
        let name = self.check_writable(name)?;
        let key = header_name(&name)?;
        trace!(name = %name, "del header");
        self.map.remove(key);
        Ok(())
    }

    /// Freezes `name` for the rest of this container's life.
    pub fn mark_immutable(&mut self, name: &str) {
        let name = CanonicalName::new(name);
        trace!(name = %name, "mark header immutable");
        self.immutable.insert(name);
    }

    #[inline]
    pub fn is_immutable(&self, name: &str) -> bool {
        self.immutable.contains(&CanonicalName::new(name))
    }

    /// Appends `cookie` to `Set-Cookie`.
    ///
    /// Never fails: a cookie with an invalid name, or a `Set-Cookie` header
    /// that has been marked immutable, is dropped and only logged.
    pub fn set_cookie(&mut self, cookie: &Cookie) {
        let value = match cookie.serialize() {
            Some(v) => v,
            None => {
                warn!(name = ?cookie.name, "invalid cookie name, dropping cookie");
                return;
            }
        };

        match HeaderValue::from_maybe_shared(Bytes::from(value)) {
            Ok(v) => self.append_privileged(SET_COOKIE, v),
            Err(e) => warn!(name = %cookie.name, err = %e, "bad cookie value, dropping cookie"),
        }
    }

    /// Appends without the restricted check. Immutability still applies.
    fn append_privileged(&mut self, name: &str, value: HeaderValue) {
        let name = CanonicalName::new(name);
        if self.immutable.contains(&name) {
            warn!(name = %name, "immutable header, dropping privileged write");
            return;
        }
        match header_name(&name) {
            Ok(key) => {
                trace!(name = %name, "privileged append");
                self.map.append(key, value);
            }
            Err(e) => warn!(err = %e, "dropping privileged write"),
        }
    }

    fn check_writable(&self, name: &str) -> Result<CanonicalName, HeaderError> {
        let name = CanonicalName::new(name);
        if is_restricted(&name) {
            debug!(name = %name, "refusing write to restricted header");
            return Err(HeaderError::Restricted(name));
        }
        if self.immutable.contains(&name) {
            debug!(name = %name, "refusing write to immutable header");
            return Err(HeaderError::Immutable(name));
        }
        Ok(name)
    }
}

#[inline]
fn value_str(v: &HeaderValue) -> Option<&str> {
    std::str::from_utf8(v.as_bytes()).ok()
}

#[inline]
fn header_name(name: &CanonicalName) -> Result<HeaderName, HeaderError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| HeaderError::InvalidName(name.as_str().to_owned()))
}

#[inline]
fn header_value(name: &CanonicalName, value: &str) -> Result<HeaderValue, HeaderError> {
    HeaderValue::from_str(value).map_err(|_| HeaderError::InvalidValue(name.clone()))
}
